//! Hebrew calendar arithmetic and the liturgical flags derived from it.
//!
//! The crate is pure: apart from [`clock::today`], every function is a
//! deterministic function of its arguments.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use siddur_luach::{CalendarDate, Flag, evaluate};
//!
//! let civil = NaiveDate::from_ymd_opt(2023, 12, 13).unwrap();
//! let date = CalendarDate::from_gregorian(civil).unwrap();
//! let flags = evaluate(date);
//! assert!(flags[Flag::Chanukah]);
//! assert!(flags[Flag::RoshChodesh]);
//! ```

pub mod clock;
pub mod error;
pub mod flags;
pub mod hebrew;

pub use clock::today;
pub use error::{CalendarError, CalendarResult};
pub use flags::{Flag, FlagSet, evaluate, evaluate_gregorian, evaluate_with, omer_day};
pub use hebrew::{CalendarDate, MAX_YEAR, MIN_YEAR, YearInfo, YearKind, YearPattern};
