//! Markup data model.

mod document;
mod expr;
mod node;
mod resolved;

pub use document::Document;
pub use expr::BooleanExpr;
pub use node::{Conditional, MarkupNode};
pub use resolved::ResolvedText;
