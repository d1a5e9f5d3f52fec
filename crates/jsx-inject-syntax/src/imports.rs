//! Import-declaration views for TSX files.
//!
//! Provides read access to a file's existing `import` statements (module
//! specifier, default import, named imports) and the byte offset at which
//! a new import declaration should be inserted.

use crate::tree::SourceTree;

/// An `import` declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// The module specifier, without quotes (`react`, `~/theme`, ...).
    pub module: String,
    /// The default-imported binding name, if any.
    pub default_import: Option<String>,
    /// Named import names (the exported names, not local aliases).
    pub named_imports: Vec<String>,
}

/// Enumerates all top-level import declarations of a file in source order.
#[must_use]
pub fn import_declarations(tree: &SourceTree) -> Vec<ImportDeclaration> {
    let root = tree.root();
    let mut out = Vec::new();

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() != "import_statement" {
            continue;
        }
        let Some(module) = module_specifier(tree, child) else {
            continue;
        };

        let mut default_import = None;
        let mut named_imports = Vec::new();
        if let Some(clause) = named_child_of_kind(child, "import_clause") {
            let mut clause_cursor = clause.walk();
            for part in clause.named_children(&mut clause_cursor) {
                match part.kind() {
                    "identifier" => default_import = Some(tree.node_text(part).to_owned()),
                    "named_imports" => collect_named_imports(tree, part, &mut named_imports),
                    _ => {}
                }
            }
        }

        out.push(ImportDeclaration {
            module,
            default_import,
            named_imports,
        });
    }

    out
}

/// Returns the byte offset just after the last top-level import
/// declaration, or `None` when the file has no imports.
#[must_use]
pub fn import_insertion_offset(tree: &SourceTree) -> Option<usize> {
    let root = tree.root();
    let mut offset = None;

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "import_statement" {
            offset = Some(child.end_byte());
        }
    }

    offset
}

fn module_specifier(tree: &SourceTree, import: tree_sitter::Node<'_>) -> Option<String> {
    let source = import.child_by_field_name("source")?;
    if let Some(fragment) = named_child_of_kind(source, "string_fragment") {
        return Some(tree.node_text(fragment).to_owned());
    }
    // An empty specifier ('') has no fragment node.
    let raw = tree.node_text(source);
    Some(raw.trim_matches(|c| c == '\'' || c == '"').to_owned())
}

fn collect_named_imports(
    tree: &SourceTree,
    named: tree_sitter::Node<'_>,
    out: &mut Vec<String>,
) {
    let mut cursor = named.walk();
    for spec in named.named_children(&mut cursor) {
        if spec.kind() != "import_specifier" {
            continue;
        }
        if let Some(name) = spec.child_by_field_name("name") {
            out.push(tree.node_text(name).to_owned());
        }
    }
}

fn named_child_of_kind<'t>(
    node: tree_sitter::Node<'t>,
    kind: &str,
) -> Option<tree_sitter::Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).find(|c| c.kind() == kind)
}
