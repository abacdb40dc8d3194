//! The only clock read in the crate.

use crate::error::CalendarResult;
use crate::hebrew::CalendarDate;

/// ## Summary
/// Returns today's Hebrew date according to the local civil date.
///
/// The Hebrew day begins at nightfall; callers that care about the evening
/// apply [`CalendarDate::next_day`] themselves.
///
/// ## Errors
/// Returns an error if the system clock is outside the supported range.
pub fn today() -> CalendarResult<CalendarDate> {
    let civil = chrono::Local::now().date_naive();
    tracing::trace!(%civil, "Reading today's date");
    CalendarDate::from_gregorian(civil)
}
