use thiserror::Error;

/// Calendar arithmetic errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Year {year} is outside the supported range {min}..={max}")]
    OutOfRange { year: i64, min: i32, max: i32 },

    #[error("Invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;

impl CalendarError {
    #[must_use]
    pub(crate) fn out_of_range(year: i64) -> Self {
        Self::OutOfRange {
            year,
            min: crate::hebrew::MIN_YEAR,
            max: crate::hebrew::MAX_YEAR,
        }
    }
}
