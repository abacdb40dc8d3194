use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use super::arith::{
    fixed_from_gregorian, gregorian_from_fixed, new_year, weekday_from_fixed, year_containing,
};
use super::year::YearInfo;
use super::{MAX_YEAR, MIN_YEAR};
use crate::error::{CalendarError, CalendarResult};

/// A validated Hebrew calendar date.
///
/// Construction checks the year range and the month/day against that year's
/// layout, so every value converts to a fixed day number without failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// ## Summary
    /// Creates a date from year, month (Nisan = 1) and day.
    ///
    /// ## Errors
    /// Returns `OutOfRange` for unsupported years and `InvalidDate` when the
    /// month or day does not exist in that year.
    pub fn new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let info = YearInfo::for_year(year)?;
        match info.month_length(month) {
            Some(length) if (1..=length).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(CalendarError::InvalidDate { year, month, day }),
        }
    }

    /// ## Summary
    /// Converts a fixed day number.
    ///
    /// ## Errors
    /// Returns `OutOfRange` if the day falls outside the supported years.
    pub fn from_fixed(fixed: i64) -> CalendarResult<Self> {
        if fixed < new_year(MIN_YEAR) {
            return Err(CalendarError::out_of_range(i64::from(MIN_YEAR) - 1));
        }
        if fixed >= new_year(MAX_YEAR + 1) {
            return Err(CalendarError::out_of_range(i64::from(MAX_YEAR) + 1));
        }

        let year = year_containing(fixed);
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or_else(|| CalendarError::out_of_range(year))?;

        let info = YearInfo::build(year);
        let (month, day) = info
            .locate(fixed)
            .ok_or_else(|| CalendarError::out_of_range(i64::from(year)))?;

        Ok(Self { year, month, day })
    }

    /// ## Summary
    /// Converts a civil date. The Hebrew date is the one whose daytime
    /// coincides with the civil date.
    ///
    /// ## Errors
    /// Returns `OutOfRange` if the date falls outside the supported years.
    pub fn from_gregorian(date: NaiveDate) -> CalendarResult<Self> {
        Self::from_fixed(fixed_from_gregorian(date))
    }

    /// ## Summary
    /// Converts to the civil date.
    ///
    /// ## Errors
    /// Returns `OutOfRange` if chrono cannot represent the date.
    pub fn to_gregorian(&self) -> CalendarResult<NaiveDate> {
        gregorian_from_fixed(self.fixed())
            .ok_or_else(|| CalendarError::out_of_range(i64::from(self.year)))
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, Nisan = 1 .. Adar II = 13.
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Anchors of the year containing this date.
    #[must_use]
    pub fn year_info(&self) -> YearInfo {
        YearInfo::build(self.year)
    }

    #[must_use]
    pub fn fixed(&self) -> i64 {
        self.year_info().fixed(self.month, self.day)
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        weekday_from_fixed(self.fixed())
    }

    /// ## Summary
    /// Moves the date by a number of days (negative moves backwards).
    ///
    /// ## Errors
    /// Returns `OutOfRange` if the result leaves the supported years.
    pub fn add_days(&self, days: i64) -> CalendarResult<Self> {
        let fixed = self.fixed().checked_add(days).ok_or_else(|| {
            let year = if days < 0 { MIN_YEAR - 1 } else { MAX_YEAR + 1 };
            CalendarError::out_of_range(i64::from(year))
        })?;
        Self::from_fixed(fixed)
    }

    /// ## Summary
    /// The following day.
    ///
    /// ## Errors
    /// Returns `OutOfRange` past the last supported day.
    pub fn next_day(&self) -> CalendarResult<Self> {
        self.add_days(1)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(date)
    }
}
