//! Exported-declaration enumeration for TSX files.
//!
//! Enumerates a file's exported declarations in source order, resolving
//! `export { X }` clauses and `export default X` identifiers back to their
//! top-level declarations so callers can inspect the declaration body.
//! Re-exports (`export { X } from './x'`) carry no local declaration and
//! are skipped.

use std::ops::Range;

use crate::tree::SourceTree;
use crate::walk::{descendants_of_kinds, node_spanning};

const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "generator_function",
    "arrow_function",
];

/// An exported declaration found in a source file.
///
/// `range` covers the declaration body (for `export const X = ...` it is
/// the single declarator), so return-statement searches stay scoped to
/// this export.
#[derive(Debug, Clone)]
pub struct ExportedDeclaration {
    /// The declaration's bound name, when one can be determined.
    pub name: Option<String>,
    /// Whether this is the file's default export.
    pub is_default: bool,
    /// Byte range of the declaration in the parsed text.
    pub range: Range<usize>,
    /// Text of the declared return-type annotation, if any.
    pub return_type: Option<String>,
}

/// A `return` statement's returned expression, with one enclosing level
/// of grouping parentheses already stripped.
#[derive(Debug, Clone)]
pub struct ReturnExpression {
    /// Byte range of the (unwrapped) expression in the parsed text.
    pub range: Range<usize>,
}

/// Enumerates all exported declarations of a file in source order.
#[must_use]
pub fn exported_declarations(tree: &SourceTree) -> Vec<ExportedDeclaration> {
    let root = tree.root();
    let mut out = Vec::new();

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "export_statement" {
            collect_export_statement(tree, child, &mut out);
        }
    }

    out
}

/// Enumerates every `return` statement's expression under a declaration.
///
/// Descends through the whole declaration, so returns inside nested
/// closures and conditionals are included. Bare `return;` statements and
/// empty groupings are skipped.
#[must_use]
pub fn return_expressions(tree: &SourceTree, decl: &ExportedDeclaration) -> Vec<ReturnExpression> {
    let Some(node) = node_spanning(tree.root(), &decl.range) else {
        return Vec::new();
    };

    let mut returns = Vec::new();
    descendants_of_kinds(node, &["return_statement"], &mut returns);

    returns
        .into_iter()
        .filter_map(|ret| {
            let mut expr = ret.named_child(0)?;
            if expr.kind() == "parenthesized_expression" {
                expr = expr.named_child(0)?;
            }
            Some(ReturnExpression {
                range: expr.byte_range(),
            })
        })
        .collect()
}

fn collect_export_statement(
    tree: &SourceTree,
    stmt: tree_sitter::Node<'_>,
    out: &mut Vec<ExportedDeclaration>,
) {
    let is_default = has_default_keyword(stmt);

    if let Some(decl) = stmt.child_by_field_name("declaration") {
        collect_declaration(tree, decl, is_default, out);
        return;
    }

    if let Some(value) = stmt.child_by_field_name("value") {
        out.push(default_exported_expression(tree, value));
        return;
    }

    // `export { X } from './x'` re-exports nothing declared locally.
    if stmt.child_by_field_name("source").is_some() {
        return;
    }

    let mut cursor = stmt.walk();
    for child in stmt.named_children(&mut cursor) {
        if child.kind() == "export_clause" {
            collect_export_clause(tree, child, out);
        }
    }
}

fn collect_declaration(
    tree: &SourceTree,
    decl: tree_sitter::Node<'_>,
    is_default: bool,
    out: &mut Vec<ExportedDeclaration>,
) {
    match decl.kind() {
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = decl.walk();
            for declarator in decl.named_children(&mut cursor) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                let name = declarator
                    .child_by_field_name("name")
                    .filter(|n| n.kind() == "identifier")
                    .map(|n| tree.node_text(n).to_owned());
                out.push(ExportedDeclaration {
                    name,
                    is_default: false,
                    range: declarator.byte_range(),
                    return_type: declared_return_type(tree, declarator),
                });
            }
        }
        _ => {
            let name = decl
                .child_by_field_name("name")
                .map(|n| tree.node_text(n).to_owned());
            out.push(ExportedDeclaration {
                name,
                is_default,
                range: decl.byte_range(),
                return_type: declared_return_type(tree, decl),
            });
        }
    }
}

fn default_exported_expression(
    tree: &SourceTree,
    value: tree_sitter::Node<'_>,
) -> ExportedDeclaration {
    if value.kind() == "identifier" {
        let name = tree.node_text(value).to_owned();
        if let Some(decl) = find_top_level_declaration(tree, &name) {
            return ExportedDeclaration {
                name: Some(name),
                is_default: true,
                range: decl.byte_range(),
                return_type: declared_return_type(tree, decl),
            };
        }
        return ExportedDeclaration {
            name: Some(name),
            is_default: true,
            range: value.byte_range(),
            return_type: None,
        };
    }

    let name = value
        .child_by_field_name("name")
        .map(|n| tree.node_text(n).to_owned());
    ExportedDeclaration {
        name,
        is_default: true,
        range: value.byte_range(),
        return_type: declared_return_type(tree, value),
    }
}

fn collect_export_clause(
    tree: &SourceTree,
    clause: tree_sitter::Node<'_>,
    out: &mut Vec<ExportedDeclaration>,
) {
    let mut cursor = clause.walk();
    for spec in clause.named_children(&mut cursor) {
        if spec.kind() != "export_specifier" {
            continue;
        }
        let Some(local) = spec.child_by_field_name("name") else {
            continue;
        };
        let local_name = tree.node_text(local).to_owned();
        let exported_name = spec
            .child_by_field_name("alias")
            .map_or_else(|| local_name.clone(), |a| tree.node_text(a).to_owned());

        let Some(decl) = find_top_level_declaration(tree, &local_name) else {
            continue;
        };
        out.push(ExportedDeclaration {
            name: Some(local_name),
            is_default: exported_name == "default",
            range: decl.byte_range(),
            return_type: declared_return_type(tree, decl),
        });
    }
}

/// Finds a top-level declaration binding `name`, looking through function,
/// class, and variable declarations (including ones nested in an export
/// statement).
fn find_top_level_declaration<'t>(
    tree: &'t SourceTree,
    name: &str,
) -> Option<tree_sitter::Node<'t>> {
    let root = tree.root();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        let candidate = if child.kind() == "export_statement" {
            child.child_by_field_name("declaration")
        } else {
            Some(child)
        };
        let Some(candidate) = candidate else { continue };

        match candidate.kind() {
            "function_declaration"
            | "generator_function_declaration"
            | "class_declaration"
            | "abstract_class_declaration" => {
                if candidate
                    .child_by_field_name("name")
                    .is_some_and(|n| tree.node_text(n) == name)
                {
                    return Some(candidate);
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                let mut inner = candidate.walk();
                for declarator in candidate.named_children(&mut inner) {
                    if declarator.kind() == "variable_declarator"
                        && declarator
                            .child_by_field_name("name")
                            .is_some_and(|n| tree.node_text(n) == name)
                    {
                        return Some(declarator);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Extracts the declared return-type annotation of a function-like node,
/// looking through a `variable_declarator` to its function value.
fn declared_return_type(tree: &SourceTree, node: tree_sitter::Node<'_>) -> Option<String> {
    let func = if FUNCTION_KINDS.contains(&node.kind()) {
        node
    } else if node.kind() == "variable_declarator" {
        node.child_by_field_name("value")
            .filter(|v| FUNCTION_KINDS.contains(&v.kind()))?
    } else {
        return None;
    };

    let annotation = func.child_by_field_name("return_type")?;
    let raw = tree.node_text(annotation);
    let ty = raw.strip_prefix(':').unwrap_or(raw).trim();
    if ty.is_empty() {
        None
    } else {
        Some(ty.to_owned())
    }
}

fn has_default_keyword(stmt: tree_sitter::Node<'_>) -> bool {
    let mut cursor = stmt.walk();
    for child in stmt.children(&mut cursor) {
        if child.kind() == "default" {
            return true;
        }
    }
    false
}
