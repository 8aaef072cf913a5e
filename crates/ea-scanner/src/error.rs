//! Error types for the ea-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! while walking the scan root and reading file sizes.

use camino::Utf8PathBuf;

/// Errors that can occur during scanning operations.
///
/// # Error Recovery Strategy
///
/// - **Root errors** ([`ScanError::RootNotFound`], [`ScanError::NotADirectory`]):
///   Fatal - reported before any traversal starts
/// - **Walk errors** ([`ScanError::Walk`]): Log warning, skip the entry, continue
/// - **Size errors** ([`ScanError::Metadata`]): Log warning, skip the file, continue
/// - **Non-UTF-8 paths** ([`ScanError::NonUtf8Path`]): Log warning, skip, continue
///
/// # Examples
///
/// ```
/// use ea_scanner::ScanError;
///
/// fn describe(err: &ScanError) -> String {
///     match err {
///         ScanError::RootNotFound(path) => format!("missing root {path}"),
///         ScanError::NotADirectory(path) => format!("not a directory {path}"),
///         ScanError::Walk(e) => format!("walk error: {e}"),
///         ScanError::Metadata { path, .. } => format!("unreadable {path}"),
///         ScanError::NonUtf8Path(p) => format!("invalid path {}", p.display()),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("directory '{0}' does not exist")]
    RootNotFound(Utf8PathBuf),

    /// The scan root exists but is not a directory.
    #[error("'{0}' is not a directory")]
    NotADirectory(Utf8PathBuf),

    /// Failed to read a directory entry below the root.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read the size of a file.
    ///
    /// Covers permission errors, broken symlinks, and files removed while
    /// the scan was running.
    #[error("failed to read size of {path}: {source}")]
    Metadata {
        /// The path of the file, relative to the scan root.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::Metadata`] error.
    #[inline]
    pub fn metadata(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error is recoverable (scanning can continue).
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Walk(_) | Self::Metadata { .. } | Self::NonUtf8Path(_)
        )
    }

    /// Returns `true` if this error is fatal (scanning should not start).
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::RootNotFound(path) | Self::NotADirectory(path) | Self::Metadata { path, .. } => {
                Some(path)
            }
            Self::Walk(_) | Self::NonUtf8Path(_) => None,
        }
    }
}
