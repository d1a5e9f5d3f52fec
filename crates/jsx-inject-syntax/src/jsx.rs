//! JSX element classification and traversal.
//!
//! Works in byte ranges rather than borrowed nodes so callers can hold the
//! results while registering spans for deferred edits.

use std::ops::Range;

use crate::tree::SourceTree;
use crate::walk::{descendants_of_kinds, node_spanning};

const ELEMENT_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element"];

/// The syntactic shape of a JSX element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsxKind {
    /// A paired-tag element: `<Tag>...</Tag>`.
    Element,
    /// A self-closing element: `<Tag />`.
    SelfClosing,
}

/// An owned view of a JSX element in a parsed file.
#[derive(Debug, Clone)]
pub struct JsxElement {
    /// Whether the element is paired-tag or self-closing.
    pub kind: JsxKind,
    /// Byte range of the whole element in the parsed text.
    pub range: Range<usize>,
    /// The element's tag name (`div`, `Button`, `Ctx.Provider`, ...).
    pub tag: String,
    /// Tag name of the immediate parent, when the parent is itself a
    /// paired-tag JSX element.
    pub parent_tag: Option<String>,
}

/// Classifies the expression at `range` as a JSX element, if it is one.
///
/// Returns `None` for anything that is not a direct paired-tag or
/// self-closing element: fragments, `null`, string literals, conditional
/// expressions, and so on.
#[must_use]
pub fn element_at(tree: &SourceTree, range: &Range<usize>) -> Option<JsxElement> {
    let mut node = node_spanning(tree.root(), range)?;

    // Several wrapper nodes can share the expression's exact range;
    // descend until the element itself is in hand.
    while !ELEMENT_KINDS.contains(&node.kind()) {
        let same_range_child = node.named_child(0).filter(|c| c.byte_range() == *range)?;
        node = same_range_child;
    }

    describe(tree, node)
}

/// Enumerates every JSX element strictly inside `range`, in pre-order.
#[must_use]
pub fn descendant_elements(tree: &SourceTree, range: &Range<usize>) -> Vec<JsxElement> {
    let Some(node) = node_spanning(tree.root(), range) else {
        return Vec::new();
    };

    let mut nodes = Vec::new();
    descendants_of_kinds(node, ELEMENT_KINDS, &mut nodes);

    nodes
        .into_iter()
        .filter(|n| n.byte_range() != *range)
        .filter_map(|n| describe(tree, n))
        .collect()
}

fn describe(tree: &SourceTree, node: tree_sitter::Node<'_>) -> Option<JsxElement> {
    let (kind, tag) = match node.kind() {
        "jsx_element" => (JsxKind::Element, opening_tag_name(tree, node)?),
        "jsx_self_closing_element" => (
            JsxKind::SelfClosing,
            node.child_by_field_name("name")
                .map(|n| tree.node_text(n).to_owned())?,
        ),
        _ => return None,
    };

    let parent_tag = node
        .parent()
        .filter(|p| p.kind() == "jsx_element")
        .and_then(|p| opening_tag_name(tree, p));

    Some(JsxElement {
        kind,
        range: node.byte_range(),
        tag,
        parent_tag,
    })
}

fn opening_tag_name(tree: &SourceTree, element: tree_sitter::Node<'_>) -> Option<String> {
    element
        .child_by_field_name("open_tag")
        .and_then(|open| open.child_by_field_name("name"))
        .map(|n| tree.node_text(n).to_owned())
}
