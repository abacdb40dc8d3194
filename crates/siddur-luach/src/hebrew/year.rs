//! Per-year anchors: month lengths, month starts and the year pattern.

use std::fmt;

use chrono::Weekday;

use super::arith::{is_leap_year, new_year, weekday_from_fixed};
use super::month::{self, ADAR, ADAR_II, KISLEV, MARHESHVAN, NISAN};
use super::{MAX_YEAR, MIN_YEAR};
use crate::error::{CalendarError, CalendarResult};

/// Year length class. Marheshvan and Kislev absorb the variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// 353 or 383 days: Marheshvan and Kislev both have 29 days.
    Deficient,
    /// 354 or 384 days: Marheshvan 29, Kislev 30.
    Regular,
    /// 355 or 385 days: both have 30 days.
    Complete,
}

impl YearKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deficient => "deficient",
            Self::Regular => "regular",
            Self::Complete => "complete",
        }
    }

    /// Letter used in the year-pattern code (chaserah, kesidrah, shlemah).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Deficient => 'H',
            Self::Regular => 'K',
            Self::Complete => 'S',
        }
    }

    fn from_length(length: u16) -> Self {
        match length % 10 {
            3 => Self::Deficient,
            4 => Self::Regular,
            _ => Self::Complete,
        }
    }
}

impl fmt::Display for YearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The keviyah of a year: everything needed to lay out its months.
///
/// Only fourteen combinations occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearPattern {
    pub new_year_weekday: Weekday,
    pub kind: YearKind,
    pub leap: bool,
    pub pesach_weekday: Weekday,
}

impl fmt::Display for YearPattern {
    /// Formats as `<Rosh Hashana weekday><kind><Pesach weekday>`, weekdays
    /// counted 1 = Sunday .. 7 = Shabbat, e.g. `7H3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.new_year_weekday.number_from_sunday(),
            self.kind.code(),
            self.pesach_weekday.number_from_sunday()
        )
    }
}

/// Anchors of one Hebrew year, computed once and shared by every rule
/// evaluated for a day of that year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearInfo {
    year: i32,
    leap: bool,
    length: u16,
    /// Indexed by month number; index 0 unused.
    month_starts: [i64; 14],
    month_lengths: [u8; 14],
}

impl YearInfo {
    /// ## Summary
    /// Computes the anchors of `year`.
    ///
    /// ## Errors
    /// Returns `OutOfRange` if the year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn for_year(year: i32) -> CalendarResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::out_of_range(i64::from(year)));
        }
        Ok(Self::build(year))
    }

    /// Builds the anchors without a range check; `year` must be supported.
    pub(crate) fn build(year: i32) -> Self {
        let leap = is_leap_year(year);
        let start = new_year(year);
        let length = u16::try_from(new_year(year + 1) - start).unwrap_or(0);
        let kind = YearKind::from_length(length);

        let mut month_starts = [0_i64; 14];
        let mut month_lengths = [0_u8; 14];
        let mut next = start;
        for m in month::in_year_order(leap) {
            let days = month_length(m, leap, kind);
            month_starts[usize::from(m)] = next;
            month_lengths[usize::from(m)] = days;
            next += i64::from(days);
        }

        Self {
            year,
            leap,
            length,
            month_starts,
            month_lengths,
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn is_leap(&self) -> bool {
        self.leap
    }

    /// Number of days in the year (353..=355 or 383..=385).
    #[must_use]
    pub const fn length(&self) -> u16 {
        self.length
    }

    #[must_use]
    pub fn kind(&self) -> YearKind {
        YearKind::from_length(self.length)
    }

    /// Fixed day of 1 Tishri.
    #[must_use]
    pub fn new_year(&self) -> i64 {
        self.month_starts[usize::from(month::TISHRI)]
    }

    /// 12 or 13.
    #[must_use]
    pub const fn month_count(&self) -> u8 {
        if self.leap { ADAR_II } else { ADAR }
    }

    /// The Adar in which Purim is kept: Adar II in leap years.
    #[must_use]
    pub const fn purim_month(&self) -> u8 {
        self.month_count()
    }

    #[must_use]
    pub fn has_month(&self, month: u8) -> bool {
        (NISAN..=self.month_count()).contains(&month)
    }

    /// Month numbers of this year in calendar order, Tishri first.
    pub fn months(&self) -> impl Iterator<Item = u8> {
        month::in_year_order(self.leap)
    }

    /// Days in `month`, or `None` if the month does not exist this year.
    #[must_use]
    pub fn month_length(&self, month: u8) -> Option<u8> {
        self.has_month(month)
            .then(|| self.month_lengths[usize::from(month)])
    }

    /// Fixed day of the first of `month`, or `None` if the month does not exist this year.
    #[must_use]
    pub fn month_start(&self, month: u8) -> Option<i64> {
        self.has_month(month)
            .then(|| self.month_starts[usize::from(month)])
    }

    /// Fixed day of `month`/`day` in this year.
    ///
    /// The month must exist this year; `day` may run past the end of the
    /// month, which is how ranges such as the eight days of Chanukah are
    /// anchored.
    #[must_use]
    pub(crate) fn fixed(&self, month: u8, day: u8) -> i64 {
        self.month_starts[usize::from(month)] + i64::from(day) - 1
    }

    #[must_use]
    pub fn pattern(&self) -> YearPattern {
        YearPattern {
            new_year_weekday: weekday_from_fixed(self.new_year()),
            kind: self.kind(),
            leap: self.leap,
            pesach_weekday: weekday_from_fixed(self.fixed(NISAN, 15)),
        }
    }

    /// Month containing the fixed day, with the day of the month.
    pub(crate) fn locate(&self, fixed: i64) -> Option<(u8, u8)> {
        month::in_year_order(self.leap).find_map(|m| {
            let start = self.month_starts[usize::from(m)];
            let offset = fixed - start;
            let length = i64::from(self.month_lengths[usize::from(m)]);
            if (0..length).contains(&offset) {
                u8::try_from(offset + 1).ok().map(|day| (m, day))
            } else {
                None
            }
        })
    }
}

fn month_length(month: u8, leap: bool, kind: YearKind) -> u8 {
    match month {
        month::IYYAR | month::TAMMUZ | month::ELUL | month::TEVET | ADAR_II => 29,
        ADAR if !leap => 29,
        MARHESHVAN if kind != YearKind::Complete => 29,
        KISLEV if kind == YearKind::Deficient => 29,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::hebrew::month::{ELUL, SHEVAT, TEVET, TISHRI};

    /// Year -> (leap, length, pattern code).
    const PATTERNS: [(i32, bool, u16, &str); 17] = [
        (3761, false, 355, "7S3"),
        (5000, true, 383, "5H1"),
        (5500, false, 355, "7S3"),
        (5700, true, 385, "5S3"),
        (5708, true, 385, "2S7"),
        (5760, true, 385, "7S5"),
        (5777, false, 353, "2H3"),
        (5782, true, 384, "3K7"),
        (5783, false, 355, "2S5"),
        (5784, true, 383, "7H3"),
        (5785, false, 355, "5S1"),
        (5786, false, 354, "3K5"),
        (5787, true, 385, "7S5"),
        (5788, false, 355, "7S3"),
        (5800, false, 355, "2S5"),
        (6000, false, 353, "2H3"),
        (7000, true, 384, "3K7"),
    ];

    #[test]
    fn known_year_patterns() {
        for (year, leap, length, code) in PATTERNS {
            let info = YearInfo::for_year(year).unwrap();
            assert_eq!(info.is_leap(), leap, "leap {year}");
            assert_eq!(info.length(), length, "length {year}");
            assert_eq!(info.pattern().to_string(), code, "pattern {year}");
        }
    }

    #[test]
    fn exactly_fourteen_patterns_occur() {
        let patterns: HashSet<YearPattern> = (5600..6000)
            .map(|year| YearInfo::build(year).pattern())
            .collect();
        assert_eq!(patterns.len(), 14);
    }

    #[test]
    fn month_lengths_sum_to_year_length() {
        for year in 5700..5800 {
            let info = YearInfo::build(year);
            let total: u16 = (NISAN..=info.month_count())
                .filter_map(|m| info.month_length(m))
                .map(u16::from)
                .sum();
            assert_eq!(total, info.length(), "year {year}");
        }
    }

    #[test]
    fn variable_months_follow_year_kind() {
        let deficient = YearInfo::build(5784);
        assert_eq!(deficient.kind(), YearKind::Deficient);
        assert_eq!(deficient.month_length(MARHESHVAN), Some(29));
        assert_eq!(deficient.month_length(KISLEV), Some(29));
        assert_eq!(deficient.month_length(ADAR), Some(30));
        assert_eq!(deficient.month_length(ADAR_II), Some(29));

        let regular = YearInfo::build(5786);
        assert_eq!(regular.kind(), YearKind::Regular);
        assert_eq!(regular.month_length(MARHESHVAN), Some(29));
        assert_eq!(regular.month_length(KISLEV), Some(30));
        assert_eq!(regular.month_length(ADAR), Some(29));
        assert_eq!(regular.month_length(ADAR_II), None);

        let complete = YearInfo::build(5785);
        assert_eq!(complete.kind(), YearKind::Complete);
        assert_eq!(complete.month_length(MARHESHVAN), Some(30));
        assert_eq!(complete.month_length(KISLEV), Some(30));
        assert_eq!(complete.month_length(TEVET), Some(29));
        assert_eq!(complete.month_length(SHEVAT), Some(30));
        assert_eq!(complete.month_length(ELUL), Some(29));
    }

    #[test]
    fn months_are_contiguous() {
        let info = YearInfo::build(5784);
        assert_eq!(info.month_start(TISHRI), Some(info.new_year()));
        assert_eq!(info.month_start(MARHESHVAN), Some(info.new_year() + 30));
        let elul_end = info.fixed(ELUL, 29);
        assert_eq!(elul_end + 1, YearInfo::build(5785).new_year());
    }

    #[test]
    fn months_run_from_tishri() {
        let common: Vec<u8> = YearInfo::build(5785).months().collect();
        assert_eq!(common, vec![7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6]);

        let leap = YearInfo::build(5784);
        assert_eq!(leap.months().count(), 13);
        assert_eq!(leap.months().nth(6), Some(ADAR_II));
    }

    #[test]
    fn out_of_range_years_are_rejected() {
        assert!(matches!(
            YearInfo::for_year(0),
            Err(CalendarError::OutOfRange { year: 0, .. })
        ));
        assert!(YearInfo::for_year(MAX_YEAR + 1).is_err());
        assert!(YearInfo::for_year(MIN_YEAR).is_ok());
    }
}
