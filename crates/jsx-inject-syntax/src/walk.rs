//! Crate-internal tree traversal helpers.

use std::ops::Range;

/// Collects all descendant nodes (excluding `node` itself) whose kind is in
/// `kinds`, in pre-order.
pub(crate) fn descendants_of_kinds<'t>(
    node: tree_sitter::Node<'t>,
    kinds: &[&str],
    out: &mut Vec<tree_sitter::Node<'t>>,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if kinds.contains(&child.kind()) {
            out.push(child);
        }
        descendants_of_kinds(child, kinds, out);
    }
}

/// Finds the outermost node whose byte range equals `range`, descending
/// from `node`.
pub(crate) fn node_spanning<'t>(
    node: tree_sitter::Node<'t>,
    range: &Range<usize>,
) -> Option<tree_sitter::Node<'t>> {
    if node.byte_range() == *range {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.start_byte() <= range.start && child.end_byte() >= range.end {
            if let Some(found) = node_spanning(child, range) {
                return Some(found);
            }
        }
    }

    None
}
