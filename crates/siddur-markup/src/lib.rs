//! Conditional liturgical markup.
//!
//! Prayer texts are XML fragments in which `<cond flag="...">` blocks are
//! kept or dropped according to a [`FlagSet`](siddur_luach::FlagSet).
//! Parsing happens once per document; the resulting tree is immutable and
//! resolved against any number of flag sets.
//!
//! ```rust
//! use siddur_luach::{Flag, FlagSet};
//! use siddur_markup::Document;
//!
//! let doc = Document::parse(r#"Ashrei<cond flag="rosh_chodesh"> and Hallel</cond>"#).unwrap();
//! let text = doc.resolve(&FlagSet::from_active([Flag::RoshChodesh])).to_text();
//! assert_eq!(text, "Ashrei and Hallel");
//! ```

pub mod model;
pub mod parse;
pub mod resolve;

pub use model::{BooleanExpr, Conditional, Document, MarkupNode, ResolvedText};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_condition};
pub use resolve::resolve;
