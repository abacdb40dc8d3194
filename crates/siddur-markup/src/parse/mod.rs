//! Markup parsing: documents and condition expressions.

mod condition;
mod document;
mod error;


pub use condition::parse_condition;
pub use document::parse;
pub use error::{ParseError, ParseErrorKind, ParseResult};
