//! Format and persist pipeline.
//!
//! After a file's edits are applied, its full text is reformatted and
//! written back to disk. Formatting and persistence failures are
//! file-granular: the failing file's edits are lost for the run, and the
//! remaining files still go through.

use std::collections::BTreeSet;
use std::fs;
use std::ops::Range;

use thiserror::Error;
use tracing::{debug, error};

use jsx_inject_syntax::{Parser, string_literals};

use crate::error::WrapError;
use crate::locate::TargetFile;

/// Quoting style for string literals outside JSX attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Prefer `'single'` quotes.
    #[default]
    Single,
    /// Prefer `"double"` quotes.
    Double,
}

impl QuoteStyle {
    const fn quote_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Style configuration handed to a [`Formatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Target line width for formatters that reflow.
    pub print_width: u32,
    /// Preferred string-literal quoting.
    pub quotes: QuoteStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 120,
            quotes: QuoteStyle::Single,
        }
    }
}

/// A failed formatting attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    /// Creates a new formatting failure.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reformats a file's full text.
///
/// Implementations may fail on syntactically invalid input.
pub trait Formatter {
    /// Returns the reformatted text.
    ///
    /// # Errors
    ///
    /// Returns an error when the input cannot be formatted, typically
    /// because it does not parse.
    fn format(&self, text: &str, options: &FormatOptions) -> Result<String, FormatError>;
}

/// The built-in formatter.
///
/// Verifies that the text still parses (rejecting a run's output if an
/// edit produced invalid syntax), normalises string-literal quoting
/// outside JSX attributes (attribute strings stay double-quoted), and
/// guarantees a single trailing newline. It does not reflow long lines;
/// `print_width` is honoured only by richer [`Formatter`]
/// implementations.
#[derive(Debug, Default, Clone, Copy)]
pub struct TsxFormatter;

impl Formatter for TsxFormatter {
    fn format(&self, text: &str, options: &FormatOptions) -> Result<String, FormatError> {
        let mut parser = Parser::new().map_err(|e| FormatError::new(e.to_string()))?;
        let tree = parser
            .parse(text)
            .map_err(|e| FormatError::new(e.to_string()))?;

        if tree.has_errors() {
            let first = tree.errors().into_iter().next();
            let detail = first.map_or_else(
                || "syntax error".to_owned(),
                |e| format!("{} at line {}, column {}", e.message, e.line, e.column),
            );
            return Err(FormatError::new(detail));
        }

        let target = options.quotes.quote_char();
        let mut edits: Vec<(Range<usize>, String)> = Vec::new();
        for literal in string_literals(&tree) {
            if literal.in_jsx_attribute {
                continue;
            }
            if let Some(requoted) = requote(text, &literal.range, target) {
                edits.push((literal.range, requoted));
            }
        }

        // Splice from the end so earlier offsets stay valid.
        edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
        let mut output = text.to_owned();
        for (range, replacement) in edits {
            output.replace_range(range, &replacement);
        }

        let trimmed_len = output.trim_end_matches('\n').len();
        output.truncate(trimmed_len);
        output.push('\n');

        Ok(output)
    }
}

/// Rebuilds a string literal with the target quote, or returns `None`
/// when it already conforms or cannot be requoted safely (the content
/// contains the target quote or an escape sequence).
fn requote(text: &str, range: &Range<usize>, target: char) -> Option<String> {
    let literal = text.get(range.clone())?;
    if literal.len() < 2 || literal.starts_with(target) {
        return None;
    }

    let inner = literal.get(1..literal.len() - 1)?;
    if inner.contains(target) || inner.contains('\\') {
        return None;
    }

    Some(format!("{target}{inner}{target}"))
}

/// Outcome of the persist phase.
#[derive(Debug, Default)]
pub struct PersistOutcome {
    /// Files successfully formatted and written.
    pub files_written: usize,
    /// Per-file failures; the batch continued past each.
    pub failures: Vec<WrapError>,
}

/// Formats and writes every changed file.
///
/// A failure to format or write one file is recorded and the remaining
/// files are still processed.
pub fn format_and_persist(
    files: &[TargetFile],
    changed: &BTreeSet<usize>,
    formatter: &dyn Formatter,
    options: &FormatOptions,
) -> PersistOutcome {
    let mut outcome = PersistOutcome::default();

    for &index in changed {
        let Some(file) = files.get(index) else {
            continue;
        };

        let formatted = match formatter.format(file.tree.text(), options) {
            Ok(formatted) => formatted,
            Err(e) => {
                error!(path = %file.path, error = %e, "formatting failed, edits lost for this file");
                outcome
                    .failures
                    .push(WrapError::format(file.path.clone(), e.to_string()));
                continue;
            }
        };

        match fs::write(&file.path, formatted) {
            Ok(()) => {
                debug!(path = %file.path, "wrote file");
                outcome.files_written += 1;
            }
            Err(e) => {
                error!(path = %file.path, error = %e, "write failed");
                outcome
                    .failures
                    .push(WrapError::persist(file.path.clone(), e));
            }
        }
    }

    outcome
}
