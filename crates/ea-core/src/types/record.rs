//! Records for zero-byte files discovered during a scan.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// A zero-byte file found under the scan root.
///
/// Field order is the serialization order of the JSON report.
///
/// # Field Conventions
///
/// - `path` is relative to the scan root and identifies the record
/// - `full_path` is the root-joined path, only used for I/O
/// - `directory` is empty for files directly under the root
/// - `extension` is lower-cased and keeps its leading dot (`".js"`), or is
///   empty when the file name has none
///
/// # Examples
///
/// ```
/// use ea_core::EmptyFileRecord;
/// use camino::Utf8Path;
///
/// let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("backend/Server.JS"));
///
/// assert_eq!(record.full_path, "./backend/Server.JS");
/// assert_eq!(record.directory, "backend");
/// assert_eq!(record.filename, "Server.JS");
/// assert_eq!(record.extension, ".js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmptyFileRecord {
    /// Path relative to the scan root.
    pub path: Utf8PathBuf,

    /// Scan root joined with `path`.
    pub full_path: Utf8PathBuf,

    /// Parent portion of `path`.
    pub directory: String,

    /// Base name of the file.
    pub filename: String,

    /// Lower-cased extension including the leading dot.
    pub extension: String,
}

impl EmptyFileRecord {
    /// Builds a record from the scan root and a path relative to it.
    #[must_use]
    pub fn new(root: &Utf8Path, relative: &Utf8Path) -> Self {
        let directory = relative.parent().map(Utf8Path::as_str).unwrap_or_default();
        let filename = relative.file_name().unwrap_or(relative.as_str());
        let extension = relative
            .extension()
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        Self {
            path: relative.to_owned(),
            full_path: root.join(relative),
            directory: directory.to_owned(),
            filename: filename.to_owned(),
            extension,
        }
    }

    /// Returns `true` if the file sits directly under the scan root.
    #[inline]
    #[must_use]
    pub fn is_root_level(&self) -> bool {
        self.directory.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_nested() {
        let record = EmptyFileRecord::new(
            Utf8Path::new("project"),
            Utf8Path::new("frontend/src/App.jsx"),
        );
        assert_eq!(record.path, Utf8PathBuf::from("frontend/src/App.jsx"));
        assert_eq!(
            record.full_path,
            Utf8PathBuf::from("project/frontend/src/App.jsx")
        );
        assert_eq!(record.directory, "frontend/src");
        assert_eq!(record.filename, "App.jsx");
        assert_eq!(record.extension, ".jsx");
        assert!(!record.is_root_level());
    }

    #[test]
    fn test_record_root_level() {
        let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("notes.TXT"));
        assert_eq!(record.directory, "");
        assert_eq!(record.filename, "notes.TXT");
        assert_eq!(record.extension, ".txt");
        assert!(record.is_root_level());
    }

    #[test]
    fn test_record_without_extension() {
        let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("docs/LICENSE"));
        assert_eq!(record.extension, "");
    }

    #[test]
    fn test_record_dotfile_has_no_extension() {
        let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("backend/.env"));
        assert_eq!(record.filename, ".env");
        assert_eq!(record.extension, "");
    }

    #[test]
    fn test_record_only_last_suffix() {
        let record =
            EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("frontend/vite.config.js"));
        assert_eq!(record.extension, ".js");
    }

    #[test]
    fn test_record_directory_and_filename_rebuild_path() {
        for raw in ["a.txt", "x/y/z.sql", "deep/er/still/file"] {
            let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new(raw));
            let rebuilt = Utf8Path::new(&record.directory).join(&record.filename);
            assert_eq!(rebuilt, record.path);
        }
    }

    #[test]
    fn test_record_serialization_field_order() {
        let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("docs/README.md"));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"path":"docs/README.md","full_path":"./docs/README.md","directory":"docs","filename":"README.md","extension":".md"}"#
        );
    }
}
