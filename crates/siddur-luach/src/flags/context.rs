use chrono::Weekday;
use siddur_core::types::Location;

use crate::hebrew::{CalendarDate, YearInfo, weekday_from_fixed};

/// Everything a rule may look at: the date, its year anchors and the location.
///
/// Built once per evaluation so every rule shares the same `YearInfo`.
#[derive(Debug, Clone)]
pub(crate) struct DayContext {
    pub date: CalendarDate,
    pub fixed: i64,
    pub weekday: Weekday,
    pub year: YearInfo,
    pub location: Location,
}

impl DayContext {
    pub(crate) fn new(date: CalendarDate, location: Location) -> Self {
        let year = date.year_info();
        let fixed = year.fixed(date.month(), date.day());
        Self {
            date,
            fixed,
            weekday: weekday_from_fixed(fixed),
            year,
            location,
        }
    }

    pub(crate) const fn month(&self) -> u8 {
        self.date.month()
    }

    pub(crate) const fn day(&self) -> u8 {
        self.date.day()
    }

    pub(crate) const fn diaspora(&self) -> bool {
        self.location.is_diaspora()
    }

    /// True on `month`/`day` exactly.
    pub(crate) fn is(&self, month: u8, day: u8) -> bool {
        self.month() == month && self.day() == day
    }

    /// True on days `from..=to` of `month`.
    pub(crate) fn within(&self, month: u8, from: u8, to: u8) -> bool {
        self.month() == month && (from..=to).contains(&self.day())
    }

    /// True on the fixed days `from..=to`.
    pub(crate) fn between(&self, from: i64, to: i64) -> bool {
        (from..=to).contains(&self.fixed)
    }
}
