//! Error types for the wrap engine.
//!
//! The taxonomy distinguishes fatal failures, which abort a run before any
//! target file is touched, from per-file and per-declaration failures,
//! which are logged and recovered so the batch continues.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

use jsx_inject_syntax::SyntaxError;

/// Errors from a wrap run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WrapError {
    /// The wrapper source file could not be loaded. Fatal: aborts the run
    /// before any target file is touched.
    #[error("import file not found: {path}")]
    ImportFileNotFound {
        /// The wrapper file path that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The wrapper source file has no exported declaration to import.
    /// Fatal, same timing as [`WrapError::ImportFileNotFound`].
    #[error("no exports found in {path}")]
    NoExportsFound {
        /// The wrapper file that exports nothing.
        path: Utf8PathBuf,
    },

    /// A parsing-layer failure.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A file failed to format. Recovered at file granularity; the file's
    /// edits are lost for this run.
    #[error("failed to format {path}: {message}")]
    Format {
        /// The file that failed to format.
        path: Utf8PathBuf,
        /// Description of the formatting failure.
        message: String,
    },

    /// A file failed to write. Recovered at file granularity.
    #[error("failed to write {path}")]
    Persist {
        /// The file that failed to write.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl WrapError {
    /// Creates an import-file-not-found error.
    #[must_use]
    pub fn import_file_not_found(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::ImportFileNotFound {
            path: path.into(),
            source,
        }
    }

    /// Creates a no-exports-found error.
    #[must_use]
    pub fn no_exports_found(path: impl Into<Utf8PathBuf>) -> Self {
        Self::NoExportsFound { path: path.into() }
    }

    /// Creates a format failure.
    #[must_use]
    pub fn format(path: impl Into<Utf8PathBuf>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a persist failure.
    #[must_use]
    pub fn persist(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Persist {
            path: path.into(),
            source,
        }
    }

    /// Returns whether this error aborts the whole run.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ImportFileNotFound { .. } | Self::NoExportsFound { .. }
        )
    }
}
