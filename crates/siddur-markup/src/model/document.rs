use std::collections::BTreeSet;

use siddur_luach::{Flag, FlagSet};

use super::node::MarkupNode;
use super::resolved::ResolvedText;
use crate::parse::{ParseResult, parse};

/// A parsed document, ready to be resolved for any date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: MarkupNode,
    flags: BTreeSet<Flag>,
}

impl Document {
    /// ## Summary
    /// Parses a document source.
    ///
    /// ## Errors
    /// Returns a `ParseError` if the source is not well formed or a condition
    /// names an unknown flag.
    pub fn parse(source: &str) -> ParseResult<Self> {
        parse(source).map(Self::from_root)
    }

    #[must_use]
    pub fn from_root(root: MarkupNode) -> Self {
        let flags = root.referenced_flags();
        Self { root, flags }
    }

    #[must_use]
    pub const fn root(&self) -> &MarkupNode {
        &self.root
    }

    /// Every flag some condition in the document refers to.
    #[must_use]
    pub const fn referenced_flags(&self) -> &BTreeSet<Flag> {
        &self.flags
    }

    #[must_use]
    pub fn resolve(&self, flags: &FlagSet) -> ResolvedText {
        crate::resolve::resolve(&self.root, flags)
    }
}
