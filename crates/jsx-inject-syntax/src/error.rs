//! Error types for the TSX parsing layer.

use thiserror::Error;

/// Errors from TSX parsing and span-edit operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser with the TSX grammar.
    #[error("failed to initialise TSX parser: {message}")]
    ParserInit {
        /// Description of the failure.
        message: String,
    },

    /// Failed to parse source text.
    #[error("failed to parse TSX source: {message}")]
    Parse {
        /// Description of the failure.
        message: String,
    },

    /// A splice range did not fall on UTF-8 character boundaries.
    #[error("edit range {start}..{end} is not on a UTF-8 boundary")]
    RangeNotOnCharBoundary {
        /// Start byte of the offending range.
        start: usize,
        /// End byte of the offending range.
        end: usize,
    },

    /// A splice targeted a span that was invalidated by an earlier edit.
    #[error("edit targets a forgotten span")]
    ForgottenSpan,
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInit {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
