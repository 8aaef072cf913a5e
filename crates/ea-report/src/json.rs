//! Machine-readable JSON report.

use std::borrow::Cow;

use camino::Utf8Path;
use chrono::SecondsFormat;
use ea_core::EmptyFileRecord;
use ea_scanner::ScanResult;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ReportError;

/// The JSON report document.
///
/// Field order is the key order in the written file.
///
/// # Examples
///
/// ```ignore
/// let report = JsonReport::from_result(&result);
/// report.write(Utf8Path::new("empty_files_report.json"))?;
///
/// let parsed = JsonReport::read(Utf8Path::new("empty_files_report.json"))?;
/// assert_eq!(parsed.total_empty_files, parsed.empty_files.len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonReport<'a> {
    /// RFC 3339 UTC time at which the scan started.
    pub scan_timestamp: String,
    /// Number of entries in `empty_files`.
    pub total_empty_files: usize,
    /// Every empty file, in walk order.
    pub empty_files: Cow<'a, [EmptyFileRecord]>,
}

impl<'a> JsonReport<'a> {
    /// Builds a report borrowing the records of a scan.
    #[must_use]
    pub fn from_result(result: &'a ScanResult) -> Self {
        Self {
            scan_timestamp: result
                .scanned_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            total_empty_files: result.records.len(),
            empty_files: Cow::Borrowed(&result.records),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    ///
    /// Non-ASCII characters are written as-is.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report, replacing any existing file.
    pub fn write(&self, path: &Utf8Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ReportError::write(path, source))?;
        info!(path = %path, records = self.total_empty_files, "JSON report written");
        Ok(())
    }
}

impl JsonReport<'static> {
    /// Reads a report written by [`JsonReport::write`].
    pub fn read(path: &Utf8Path) -> Result<Self, ReportError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ReportError::read(path, source))?;
        Ok(serde_json::from_str(&content)?)
    }
}
