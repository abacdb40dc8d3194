//! Integer calendar arithmetic.
//!
//! All intermediate values are `i64`; the molad computation works in parts
//! (1/1080 of an hour), so no floating point is involved.

use chrono::{Datelike, NaiveDate, Weekday};

/// Fixed day of 1 Tishri, year 1 (Julian 3761 BCE, October 7).
pub(crate) const HEBREW_EPOCH: i64 = -1_373_427;

/// Fixed day of Julian 0001-01-01.
const JULIAN_EPOCH: i64 = -1;

/// Parts in a day.
const DAY_PARTS: i64 = 25_920;

/// True if the Hebrew year has thirteen months (years 3, 6, 8, 11, 14, 17, 19 of the cycle).
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Days from the epoch to the molad of Tishri, after the weekday postponement.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(DAY_PARTS);

    // Rosh Hashana never falls on Sunday, Wednesday or Friday.
    days + i64::from((3 * (days + 1)).rem_euclid(7) < 3)
}

/// Extra postponement keeping year lengths within 353..=355 and 383..=385.
fn year_length_correction(year: i64) -> i64 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);

    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

pub(crate) fn new_year_i64(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

/// Fixed day of 1 Tishri of `year`.
#[must_use]
pub fn new_year(year: i32) -> i64 {
    new_year_i64(i64::from(year))
}

/// Hebrew year containing the fixed day. The result may lie outside the
/// supported range; callers check it.
pub(crate) fn year_containing(fixed: i64) -> i64 {
    // 35975351/98496 is the mean year length; the estimate is never too high
    // by more than one year.
    let approx = ((fixed - HEBREW_EPOCH) * 98_496).div_euclid(35_975_351);
    let mut year = approx - 1;
    while new_year_i64(year + 1) <= fixed {
        year += 1;
    }
    year
}

/// Weekday of a fixed day number. Fixed day 1 is a Monday.
#[must_use]
pub fn weekday_from_fixed(fixed: i64) -> Weekday {
    match fixed.rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[must_use]
pub fn fixed_from_gregorian(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Gregorian date of a fixed day, or `None` outside chrono's range.
#[must_use]
pub fn gregorian_from_fixed(fixed: i64) -> Option<NaiveDate> {
    i32::try_from(fixed)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Fixed day of a proleptic Julian date, astronomical year numbering (year 0 = 1 BCE).
#[must_use]
pub fn fixed_from_julian(year: i64, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let prior_years = year - 1;
    let month_correction = if month <= 2 {
        0
    } else if year.rem_euclid(4) == 0 {
        -1
    } else {
        -2
    };

    JULIAN_EPOCH - 1
        + 365 * prior_years
        + prior_years.div_euclid(4)
        + (367 * month - 362).div_euclid(12)
        + month_correction
        + i64::from(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_a_monday_in_julian_october() {
        assert_eq!(HEBREW_EPOCH, fixed_from_julian(-3760, 10, 7));
        assert_eq!(weekday_from_fixed(HEBREW_EPOCH), Weekday::Mon);
        assert_eq!(new_year(1), HEBREW_EPOCH);
    }

    #[test]
    fn leap_years_follow_the_metonic_cycle() {
        let leap_positions: Vec<i32> = (1..=19).filter(|y| is_leap_year(*y)).collect();
        assert_eq!(leap_positions, vec![3, 6, 8, 11, 14, 17, 19]);

        assert!(is_leap_year(5784));
        assert!(!is_leap_year(5785));
        assert!(!is_leap_year(5786));
        assert!(is_leap_year(5787));
        assert!(is_leap_year(5760));
    }

    #[test]
    fn new_years_match_known_gregorian_dates() {
        let cases = [
            (5700, ymd(1939, 9, 14)),
            (5760, ymd(1999, 9, 11)),
            (5783, ymd(2022, 9, 26)),
            (5784, ymd(2023, 9, 16)),
            (5785, ymd(2024, 10, 3)),
            (5786, ymd(2025, 9, 23)),
            (5787, ymd(2026, 9, 12)),
            (6000, ymd(2239, 9, 30)),
        ];

        for (year, expected) in cases {
            assert_eq!(
                gregorian_from_fixed(new_year(year)),
                Some(expected),
                "Rosh Hashana {year}"
            );
        }
    }

    #[test]
    fn rosh_hashana_avoids_sunday_wednesday_friday() {
        for year in 5000..6000 {
            let weekday = weekday_from_fixed(new_year(year));
            assert!(
                !matches!(weekday, Weekday::Sun | Weekday::Wed | Weekday::Fri),
                "year {year} starts on {weekday}"
            );
        }
    }

    #[test]
    fn year_lengths_stay_within_bounds() {
        for year in 1..9999 {
            let length = new_year(year + 1) - new_year(year);
            let expected = if is_leap_year(year) {
                383..=385
            } else {
                353..=355
            };
            assert!(expected.contains(&length), "year {year} has {length} days");
        }
    }

    #[test]
    fn year_containing_inverts_new_year() {
        for year in [1_i64, 2, 3761, 5784, 5785, 9998] {
            let start = new_year_i64(year);
            assert_eq!(year_containing(start), year);
            assert_eq!(year_containing(start - 1), year - 1);
            assert_eq!(year_containing(new_year_i64(year + 1) - 1), year);
        }
    }

    #[test]
    fn julian_reform_offset() {
        // Julian 1582-10-05 is the day the Gregorian calendar calls 1582-10-15.
        assert_eq!(
            gregorian_from_fixed(fixed_from_julian(1582, 10, 5)),
            Some(ymd(1582, 10, 15))
        );
        assert_eq!(
            gregorian_from_fixed(fixed_from_julian(2023, 11, 23)),
            Some(ymd(2023, 12, 6))
        );
    }

    #[test]
    fn gregorian_round_trip() {
        let date = ymd(2007, 2, 25);
        let fixed = fixed_from_gregorian(date);
        assert_eq!(fixed, 732_732);
        assert_eq!(gregorian_from_fixed(fixed), Some(date));
        assert_eq!(weekday_from_fixed(fixed), Weekday::Sun);
    }
}
