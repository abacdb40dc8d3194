//! Consumer interface over parsed documents and the calendar.

pub mod error;
pub mod library;

pub use error::{ServiceError, ServiceResult};
pub use library::{Library, LibraryEntry};
