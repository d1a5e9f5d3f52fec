//! The wrap decision engine.
//!
//! Given located JSX roots, decides which elements to wrap under the
//! active policy and produces deferred edits. In root mode the returned
//! root itself is the candidate; in named-target mode every element whose
//! tag matches the target name is a candidate, at any depth.
//!
//! Idempotency is checked differently per mode: in root mode a previous
//! run left the wrapper as the new root, so the root's own tag is
//! compared; in named-target mode the wrapper surrounds an arbitrary tag,
//! so the candidate's immediate parent tag is compared instead.

use std::collections::BTreeSet;

use tracing::debug;

use jsx_inject_syntax::{JsxElement, SpanId, descendant_elements};

use crate::descriptor::ImportDescriptor;
use crate::locate::{LocatedReturn, TargetFile};

/// A deferred wrap operation, not yet applied to any tree.
#[derive(Debug, Clone)]
pub struct PendingEdit {
    /// Index of the owning file in the run's target batch.
    pub file: usize,
    /// Tracked span of the element to replace.
    pub span: SpanId,
    /// The wrapped replacement text.
    pub replacement: String,
}

/// The full set of edits decided for a run, in discovery order.
#[derive(Debug, Default)]
pub struct WrapPlan {
    /// Deferred wrap edits.
    pub edits: Vec<PendingEdit>,
    /// Indices of files that need the wrapper import.
    pub needs_import: BTreeSet<usize>,
    /// Number of wrap candidates considered, including already-wrapped
    /// ones that were skipped.
    pub candidates: usize,
}

/// Decides the edits for a batch of located returns.
///
/// `target_component` absent selects root mode; present selects
/// named-target mode. `props` is literal text inserted verbatim inside
/// the opening wrapper tag.
#[must_use]
pub fn plan_wraps(
    files: &mut [TargetFile],
    located: &[LocatedReturn],
    descriptor: &ImportDescriptor,
    target_component: Option<&str>,
    props: Option<&str>,
) -> WrapPlan {
    let mut plan = WrapPlan::default();

    for ret in located {
        match target_component {
            None => plan_root(files, ret, descriptor, props, &mut plan),
            Some(target) => plan_named(files, ret, descriptor, target, props, &mut plan),
        }
    }

    plan
}

fn plan_root(
    files: &mut [TargetFile],
    ret: &LocatedReturn,
    descriptor: &ImportDescriptor,
    props: Option<&str>,
    plan: &mut WrapPlan,
) {
    plan.candidates += 1;

    // A previous run made the wrapper the root; wrapping again would
    // nest it forever.
    if ret.element.tag == descriptor.binding_name {
        debug!(tag = %ret.element.tag, "root already wrapped, skipping");
        return;
    }

    push_edit(files, ret.file, &ret.element, descriptor, props, plan);
}

fn plan_named(
    files: &mut [TargetFile],
    ret: &LocatedReturn,
    descriptor: &ImportDescriptor,
    target: &str,
    props: Option<&str>,
    plan: &mut WrapPlan,
) {
    let mut candidates = Vec::new();
    if ret.element.tag == target {
        candidates.push(ret.element.clone());
    }
    let descendants = {
        let file = &files[ret.file];
        descendant_elements(&file.tree, &ret.element.range)
    };
    candidates.extend(descendants.into_iter().filter(|e| e.tag == target));

    for candidate in candidates {
        plan.candidates += 1;

        // Already wrapped by this wrapper one level up the tree.
        if candidate.parent_tag.as_deref() == Some(descriptor.binding_name.as_str()) {
            debug!(tag = %candidate.tag, "target already wrapped, skipping");
            continue;
        }

        push_edit(files, ret.file, &candidate, descriptor, props, plan);
    }
}

fn push_edit(
    files: &mut [TargetFile],
    file_index: usize,
    element: &JsxElement,
    descriptor: &ImportDescriptor,
    props: Option<&str>,
    plan: &mut WrapPlan,
) {
    let file = &mut files[file_index];
    let original = file
        .tree
        .text()
        .get(element.range.clone())
        .unwrap_or_default()
        .to_owned();
    let replacement = wrapped_text(&descriptor.binding_name, props, &original);
    let span = file.tree.track(element.range.clone());

    plan.edits.push(PendingEdit {
        file: file_index,
        span,
        replacement,
    });
    plan.needs_import.insert(file_index);
}

fn wrapped_text(binding: &str, props: Option<&str>, original: &str) -> String {
    let props_text = props.map(|p| format!(" {p}")).unwrap_or_default();
    format!("<{binding}{props_text}>{original}</{binding}>")
}
