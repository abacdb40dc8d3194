use std::collections::BTreeSet;

use serde::Serialize;
use siddur_luach::Flag;

use super::expr::BooleanExpr;

/// A node of an authored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MarkupNode {
    /// Literal source text, including any formatting markup, kept verbatim.
    Text(String),
    Conditional(Conditional),
    Sequence(Vec<MarkupNode>),
}

/// A block included only when its expression holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conditional {
    pub expr: BooleanExpr,
    pub body: Vec<MarkupNode>,
    /// Chosen when the expression is false; empty when there is no `<else/>`.
    pub else_body: Vec<MarkupNode>,
}

impl Conditional {
    #[must_use]
    pub fn new(expr: BooleanExpr, body: Vec<MarkupNode>, else_body: Vec<MarkupNode>) -> Self {
        Self {
            expr,
            body,
            else_body,
        }
    }
}

impl MarkupNode {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Flags referenced anywhere in this subtree, including untaken branches.
    #[must_use]
    pub fn referenced_flags(&self) -> BTreeSet<Flag> {
        let mut flags = BTreeSet::new();
        self.collect_flags(&mut flags);
        flags
    }

    fn collect_flags(&self, flags: &mut BTreeSet<Flag>) {
        match self {
            Self::Text(_) => {}
            Self::Conditional(cond) => {
                cond.expr.collect_flags(flags);
                for node in cond.body.iter().chain(&cond.else_body) {
                    node.collect_flags(flags);
                }
            }
            Self::Sequence(nodes) => {
                for node in nodes {
                    node.collect_flags(flags);
                }
            }
        }
    }
}
