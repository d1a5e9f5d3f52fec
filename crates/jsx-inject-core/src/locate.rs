//! Component location across a batch of target files.
//!
//! Scans parsed target files for exported declarations whose declared
//! return type is a JSX element type, and extracts each qualifying
//! declaration's returned JSX root elements.

use std::fs;

use camino::Utf8PathBuf;
use tracing::{debug, warn};

use jsx_inject_syntax::{JsxElement, Parser, SourceTree, element_at, exported_declarations, return_expressions};

use crate::type_query::TypeQuery;

/// A target file loaded for a wrap run.
pub struct TargetFile {
    /// The file's path on disk.
    pub path: Utf8PathBuf,
    /// The file's parsed tree; mutated in place by the applier.
    pub tree: SourceTree,
}

/// A qualifying returned JSX root: one per JSX-returning `return`
/// statement of a component.
#[derive(Debug, Clone)]
pub struct LocatedReturn {
    /// Index of the owning file in the run's target batch.
    pub file: usize,
    /// The returned root element.
    pub element: JsxElement,
}

/// Loads and parses target files.
///
/// A file that cannot be read or parsed is logged and skipped; it does
/// not abort the batch.
#[must_use]
pub fn load_targets(parser: &mut Parser, paths: &[Utf8PathBuf]) -> Vec<TargetFile> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                warn!(path = %path, error = %e, "skipping unreadable target file");
                continue;
            }
        };
        match parser.parse(source) {
            Ok(tree) => files.push(TargetFile {
                path: path.clone(),
                tree,
            }),
            Err(e) => warn!(path = %path, error = %e, "skipping unparsable target file"),
        }
    }

    files
}

/// Locates every qualifying `(file, returned JSX root)` pair in the batch.
///
/// A declaration qualifies when it is exported and its return type, as
/// reported by `types`, is a JSX element type. Every `return` statement in
/// the declaration's body contributes one pair, after unwrapping a single
/// level of grouping parentheses; returns whose expression is not a direct
/// JSX element (a `null`, a string, a fragment) are skipped. A declaration
/// whose inspection fails is logged and skipped without aborting the rest.
#[must_use]
pub fn locate_components(files: &[TargetFile], types: &dyn TypeQuery) -> Vec<LocatedReturn> {
    let mut located = Vec::new();

    for (index, file) in files.iter().enumerate() {
        for decl in exported_declarations(&file.tree) {
            let return_type = match types.declared_return_type(&decl) {
                Ok(return_type) => return_type,
                Err(e) => {
                    warn!(path = %file.path, declaration = ?decl.name, error = %e, "skipping declaration");
                    continue;
                }
            };
            let Some(return_type) = return_type else {
                continue;
            };
            if !types.is_jsx_element_type(&return_type) {
                continue;
            }

            for ret in return_expressions(&file.tree, &decl) {
                match element_at(&file.tree, &ret.range) {
                    Some(element) => located.push(LocatedReturn {
                        file: index,
                        element,
                    }),
                    None => {
                        debug!(path = %file.path, declaration = ?decl.name, "return is not a direct JSX element");
                    }
                }
            }
        }
    }

    located
}
