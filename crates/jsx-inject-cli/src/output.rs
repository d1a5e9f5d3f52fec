//! Run-summary console output.

use std::io::{self, Write};

use jsx_inject_core::WrapReport;

/// Writes the summary of one wrap run.
pub(crate) fn print_report(out: &mut dyn Write, report: &WrapReport) -> io::Result<()> {
    writeln!(out, "Target files: {}", report.files_scanned)?;
    writeln!(out, "Candidates: {}", report.candidates_found)?;
    writeln!(out, "Replacements: {}", report.replacements_applied)?;
    writeln!(out, "Imports added: {}", report.imports_added)?;
    writeln!(out, "Files written: {}", report.files_written)?;
    if report.files_failed > 0 {
        writeln!(out, "Files failed: {}", report.files_failed)?;
    }
    Ok(())
}
