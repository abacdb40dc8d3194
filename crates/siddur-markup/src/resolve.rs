//! Resolution of a markup tree against a flag set.

use siddur_luach::FlagSet;

use crate::model::{MarkupNode, ResolvedText};

/// ## Summary
/// Replaces every conditional with the branch selected by `flags`.
///
/// Conditionals inside an untaken branch are never evaluated. The output
/// holds only text and sequences and shares nothing with `tree`.
#[must_use]
pub fn resolve(tree: &MarkupNode, flags: &FlagSet) -> ResolvedText {
    match tree {
        MarkupNode::Text(text) => ResolvedText::Text(text.clone()),
        MarkupNode::Sequence(nodes) => resolve_all(nodes, flags),
        MarkupNode::Conditional(cond) => {
            let branch = if cond.expr.evaluate(flags) {
                &cond.body
            } else {
                &cond.else_body
            };
            resolve_all(branch, flags)
        }
    }
}

fn resolve_all(nodes: &[MarkupNode], flags: &FlagSet) -> ResolvedText {
    ResolvedText::Sequence(nodes.iter().map(|node| resolve(node, flags)).collect())
}
