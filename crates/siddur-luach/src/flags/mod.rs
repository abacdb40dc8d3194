//! Liturgical flags and their evaluation.

mod context;
mod flag;
mod rules;
mod set;

#[cfg(test)]
mod rules_tests;

use chrono::NaiveDate;
use siddur_core::types::Location;

pub use flag::Flag;
pub use set::FlagSet;

use crate::error::CalendarResult;
use crate::hebrew::CalendarDate;
use context::DayContext;

/// ## Summary
/// Computes every flag for `date` as observed in Israel.
///
/// Pure and total: every flag in the vocabulary receives a value.
#[must_use]
pub fn evaluate(date: CalendarDate) -> FlagSet {
    evaluate_with(date, Location::Israel)
}

/// ## Summary
/// Computes every flag for `date` as observed at `location`.
#[must_use]
#[tracing::instrument(level = "trace", fields(date = %date, location = %location))]
pub fn evaluate_with(date: CalendarDate, location: Location) -> FlagSet {
    let day = DayContext::new(date, location);
    let flags = FlagSet::from_fn(|flag| flag.holds(&day));
    tracing::trace!(active = %flags, "Evaluated flags");
    flags
}

/// ## Summary
/// Converts a civil date and computes its flags.
///
/// ## Errors
/// Returns `OutOfRange` if the date falls outside the supported years.
#[tracing::instrument(level = "debug")]
pub fn evaluate_gregorian(date: NaiveDate, location: Location) -> CalendarResult<FlagSet> {
    let hebrew = CalendarDate::from_gregorian(date)?;
    Ok(evaluate_with(hebrew, location))
}

/// Day of the Omer count (1..=49), or `None` outside the count.
#[must_use]
pub fn omer_day(date: CalendarDate) -> Option<u8> {
    rules::omer_count(&DayContext::new(date, Location::Israel))
}
