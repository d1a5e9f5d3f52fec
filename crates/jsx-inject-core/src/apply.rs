//! Mutation and import injection.
//!
//! Applies a [`WrapPlan`] against the live trees: import injection first,
//! then node replacement in discovery order. A pending edit whose span was
//! invalidated by an earlier replacement in the same file is skipped
//! silently; stale spans are an expected consequence of overlapping edits,
//! not an anomaly.

use std::collections::{BTreeSet, HashSet};

use camino::Utf8PathBuf;
use tracing::{debug, warn};

use jsx_inject_syntax::{import_declarations, import_insertion_offset};

use crate::descriptor::ImportDescriptor;
use crate::engine::WrapPlan;
use crate::locate::TargetFile;

/// Counters from applying a plan.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Replacements actually applied.
    pub replacements_applied: usize,
    /// New import declarations inserted.
    pub imports_added: usize,
    /// Edits skipped because their span was forgotten.
    pub edits_skipped: usize,
    /// Indices of files whose text changed.
    pub changed_files: BTreeSet<usize>,
}

/// Applies a plan's import injections and replacements.
pub fn apply_plan(
    files: &mut [TargetFile],
    plan: &WrapPlan,
    descriptor: &ImportDescriptor,
) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    // Per-run marker set: a file receives at most one insertion no matter
    // how many edits need the import.
    let mut already_injected: HashSet<Utf8PathBuf> = HashSet::new();

    for &index in &plan.needs_import {
        let Some(file) = files.get_mut(index) else {
            continue;
        };
        if !already_injected.insert(file.path.clone()) {
            continue;
        }
        if inject_import(file, descriptor) {
            outcome.imports_added += 1;
            outcome.changed_files.insert(index);
        }
    }

    // Replacements run strictly after all import injections, in discovery
    // order, guarded against forgotten spans.
    for edit in &plan.edits {
        let Some(file) = files.get_mut(edit.file) else {
            continue;
        };
        if file.tree.is_forgotten(edit.span) {
            debug!(path = %file.path, "skipping edit into replaced span");
            outcome.edits_skipped += 1;
            continue;
        }
        match file.tree.replace_span(edit.span, &edit.replacement) {
            Ok(()) => {
                outcome.replacements_applied += 1;
                outcome.changed_files.insert(edit.file);
            }
            Err(e) => {
                warn!(path = %file.path, error = %e, "skipping unappliable edit");
                outcome.edits_skipped += 1;
            }
        }
    }

    outcome
}

/// Inserts the wrapper import into a file unless an existing declaration
/// already satisfies it. Returns whether the file's text changed.
fn inject_import(file: &mut TargetFile, descriptor: &ImportDescriptor) -> bool {
    let satisfied = import_declarations(&file.tree).iter().any(|import| {
        if import.module != descriptor.module_path {
            return false;
        }
        if descriptor.is_default {
            import.default_import.as_deref() == Some(descriptor.binding_name.as_str())
        } else {
            import
                .named_imports
                .iter()
                .any(|name| name == &descriptor.binding_name)
        }
    });
    if satisfied {
        debug!(path = %file.path, "wrapper already imported");
        return false;
    }

    let line = import_line(descriptor);
    let result = match import_insertion_offset(&file.tree) {
        Some(offset) => file.tree.insert_text(offset, &format!("\n{line}")),
        None => file.tree.insert_text(0, &format!("{line}\n")),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %file.path, error = %e, "failed to insert import");
            false
        }
    }
}

fn import_line(descriptor: &ImportDescriptor) -> String {
    if descriptor.is_default {
        format!(
            "import {} from '{}';",
            descriptor.binding_name, descriptor.module_path
        )
    } else {
        format!(
            "import {{ {} }} from '{}';",
            descriptor.binding_name, descriptor.module_path
        )
    }
}
