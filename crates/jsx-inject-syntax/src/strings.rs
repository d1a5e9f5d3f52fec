//! String-literal enumeration, used by the formatting pipeline.

use std::ops::Range;

use crate::tree::SourceTree;
use crate::walk::descendants_of_kinds;

/// A plain (non-template) string literal in a parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Byte range of the literal, quotes included.
    pub range: Range<usize>,
    /// Whether the literal is the value of a JSX attribute.
    pub in_jsx_attribute: bool,
}

/// Enumerates every plain string literal of a file, in source order.
///
/// Template literals are not included.
#[must_use]
pub fn string_literals(tree: &SourceTree) -> Vec<StringLiteral> {
    let mut nodes = Vec::new();
    descendants_of_kinds(tree.root(), &["string"], &mut nodes);

    nodes
        .into_iter()
        .map(|node| StringLiteral {
            range: node.byte_range(),
            in_jsx_attribute: node
                .parent()
                .is_some_and(|p| p.kind() == "jsx_attribute"),
        })
        .collect()
}
