//! Wrap run orchestration.
//!
//! The single entry point of the engine: resolve the wrapper's import
//! descriptor, locate components across the target batch, decide the
//! edits, apply them, then format and persist. Everything runs
//! single-threaded and sequentially, file batch at a time.

use camino::Utf8PathBuf;
use tracing::info;

use jsx_inject_syntax::Parser;

use crate::apply::apply_plan;
use crate::descriptor::resolve_descriptor;
use crate::engine::plan_wraps;
use crate::error::WrapError;
use crate::locate::{load_targets, locate_components};
use crate::pipeline::{FormatOptions, Formatter, TsxFormatter, format_and_persist};
use crate::type_query::AnnotationTypeQuery;

/// One wrap invocation. Immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct WrapRequest {
    /// Resolved filesystem path of the wrapper component's source file.
    pub import_file_path: Utf8PathBuf,
    /// The path to emit in generated import statements; may differ from
    /// the filesystem path (an alias, for example).
    pub import_path: String,
    /// Already-resolved target file paths.
    pub targets: Vec<Utf8PathBuf>,
    /// Tag name to wrap wherever it appears; absent selects root mode.
    pub target_component: Option<String>,
    /// Literal text inserted verbatim inside the opening wrapper tag.
    pub props: Option<String>,
}

/// What a run found and what it actually changed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WrapReport {
    /// Target files successfully loaded and scanned.
    pub files_scanned: usize,
    /// Wrap candidates considered, including already-wrapped skips.
    pub candidates_found: usize,
    /// Replacements actually applied.
    pub replacements_applied: usize,
    /// Import declarations inserted.
    pub imports_added: usize,
    /// Files formatted and written back.
    pub files_written: usize,
    /// Files whose format or write failed; their edits were lost.
    pub files_failed: usize,
}

/// Runs a wrap invocation with the built-in formatter at the fixed house
/// style (print width 120, single quotes).
///
/// # Errors
///
/// Returns a fatal error ([`WrapError::ImportFileNotFound`],
/// [`WrapError::NoExportsFound`], or a parser-initialisation failure)
/// before any target file is touched. Per-file and per-declaration
/// failures are logged, counted in the report, and recovered.
pub fn run(request: &WrapRequest) -> Result<WrapReport, WrapError> {
    run_with(request, &TsxFormatter, &FormatOptions::default())
}

/// Runs a wrap invocation with an explicit formatter and style.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(
    request: &WrapRequest,
    formatter: &dyn Formatter,
    options: &FormatOptions,
) -> Result<WrapReport, WrapError> {
    let mut parser = Parser::new()?;

    // Fatal failures happen here, before any target is read.
    let descriptor =
        resolve_descriptor(&mut parser, &request.import_file_path, &request.import_path)?;

    let mut files = load_targets(&mut parser, &request.targets);
    info!(targets = files.len(), "scanning target files");

    let located = locate_components(&files, &AnnotationTypeQuery);
    let plan = plan_wraps(
        &mut files,
        &located,
        &descriptor,
        request.target_component.as_deref(),
        request.props.as_deref(),
    );
    let outcome = apply_plan(&mut files, &plan, &descriptor);
    let persisted = format_and_persist(&files, &outcome.changed_files, formatter, options);

    let report = WrapReport {
        files_scanned: files.len(),
        candidates_found: plan.candidates,
        replacements_applied: outcome.replacements_applied,
        imports_added: outcome.imports_added,
        files_written: persisted.files_written,
        files_failed: persisted.failures.len(),
    };
    info!(
        candidates = report.candidates_found,
        replacements = report.replacements_applied,
        imports = report.imports_added,
        "wrap run finished"
    );

    Ok(report)
}
