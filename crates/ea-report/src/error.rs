//! Error types for the ea-report crate.

use camino::Utf8PathBuf;

/// Errors that can occur while producing report artifacts.
///
/// Each artifact fails on its own; one failed write never removes an
/// artifact that was already written.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Failed to serialize or parse the JSON report.
    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The output path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a previously written report.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The report path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Creates a new [`ReportError::Write`] error.
    #[inline]
    pub fn write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ReportError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
