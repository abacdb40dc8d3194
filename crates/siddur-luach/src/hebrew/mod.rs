//! Hebrew calendar (Reingold & Dershowitz arithmetic on fixed day numbers).
//!
//! Fixed day numbers count days from the proleptic Gregorian 0001-01-01 (day 1),
//! matching `chrono::NaiveDate::num_days_from_ce`.

mod arith;
mod date;
pub mod month;
mod year;

pub use arith::{
    fixed_from_gregorian, fixed_from_julian, gregorian_from_fixed, is_leap_year, new_year,
    weekday_from_fixed,
};
pub use date::CalendarDate;
pub use year::{YearInfo, YearKind, YearPattern};

/// First supported Hebrew year.
pub const MIN_YEAR: i32 = 1;
/// Last supported Hebrew year.
pub const MAX_YEAR: i32 = 9999;
