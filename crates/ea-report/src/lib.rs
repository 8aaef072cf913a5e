//! Console, JSON, and Markdown reports for empty-file scans.
//!
//! Everything here consumes a finished [`ScanResult`]; nothing in this crate
//! touches the scanned tree.
//!
//! - [`ConsoleReport`]: human-facing summary for stdout
//! - [`JsonReport`]: the `empty_files_report.json` document
//! - [`render_checklist`] / [`write_checklist`]: the `EMPTY_FILES_TODO.md` checklist
//! - [`persist`]: writes both files for an [`OutputConfig`]

#![deny(clippy::all)]
#![warn(missing_docs)]

mod checklist;
mod console;
mod error;
mod json;

pub use checklist::{ROOT_HEADING, render_checklist, write_checklist};
pub use console::{ConsoleReport, write_banner, write_next_steps};
pub use error::ReportError;
pub use json::JsonReport;

use camino::Utf8PathBuf;
use ea_core::OutputConfig;
use ea_scanner::ScanResult;

/// Outcome of writing both report files.
///
/// Each artifact is attempted independently, so one can succeed while the
/// other fails.
#[derive(Debug)]
pub struct Persisted {
    /// Path of the JSON report, or why it could not be written.
    pub report: Result<Utf8PathBuf, ReportError>,
    /// Path of the Markdown checklist, or why it could not be written.
    pub checklist: Result<Utf8PathBuf, ReportError>,
}

impl Persisted {
    /// Returns `true` if both files were written.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.report.is_ok() && self.checklist.is_ok()
    }
}

/// Writes the JSON report and then the checklist.
///
/// A failure writing the report does not stop the checklist from being
/// attempted.
pub fn persist(result: &ScanResult, output: &OutputConfig) -> Persisted {
    let report_path = output.report_path();
    let report = JsonReport::from_result(result)
        .write(&report_path)
        .map(|()| report_path);

    let todo_path = output.todo_path();
    let checklist = write_checklist(&result.records, &todo_path).map(|()| todo_path);

    Persisted { report, checklist }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scan_result;
    use tempfile::TempDir;

    fn output_in(temp_dir: &TempDir) -> OutputConfig {
        OutputConfig {
            output_dir: Utf8PathBuf::from_path_buf(temp_dir.path().to_owned())
                .expect("Invalid path"),
            ..Default::default()
        }
    }

    #[test]
    fn test_persist_writes_both_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = output_in(&temp_dir);
        let result = scan_result(&["backend/server.js", "docs/README.md"], 3);

        let persisted = persist(&result, &output);

        assert!(persisted.is_complete());
        assert!(output.report_path().exists());
        assert!(output.todo_path().exists());

        let parsed = JsonReport::read(&output.report_path()).expect("Read failed");
        assert_eq!(parsed.total_empty_files, 2);
    }

    #[test]
    fn test_persist_attempts_checklist_after_report_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut output = output_in(&temp_dir);
        // A directory where the report file should go makes the write fail.
        output.report_file = "blocked".to_owned();
        std::fs::create_dir(output.report_path()).expect("Failed to create directory");
        let result = scan_result(&["docs/README.md"], 1);

        let persisted = persist(&result, &output);

        assert!(matches!(persisted.report, Err(ReportError::Write { .. })));
        assert!(persisted.checklist.is_ok());
        assert!(!persisted.is_complete());
        assert!(output.todo_path().exists());
    }
}
