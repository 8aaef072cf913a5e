//! Human-readable console report.
//!
//! Rendering writes to any [`Write`] so the output can be captured in tests;
//! the binary hands it a locked stdout.

use std::io::{self, Write};

use camino::Utf8Path;
use ea_core::{Category, CategoryBuckets, DEFAULT_PREVIEW_LIMIT};
use ea_scanner::ScanResult;

const RULE: &str = "============================================================";

/// Console summary of a finished scan.
///
/// # Examples
///
/// ```ignore
/// let report = ConsoleReport::new(&result).with_preview_limit(10);
/// report.write_to(&mut std::io::stdout().lock())?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport<'a> {
    result: &'a ScanResult,
    preview_limit: usize,
}

impl<'a> ConsoleReport<'a> {
    /// Creates a report showing up to [`DEFAULT_PREVIEW_LIMIT`] paths per location.
    #[must_use]
    pub const fn new(result: &'a ScanResult) -> Self {
        Self {
            result,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }

    /// Sets how many paths are listed per location category.
    #[must_use]
    pub const fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Writes the full report.
    ///
    /// When the scan found no empty files only the summary and a closing
    /// message are written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_summary(out)?;

        if self.result.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "No empty files found! Your project structure is complete."
            )?;
        } else {
            self.write_locations(out)?;
            self.write_file_types(out)?;
            self.write_critical(out)?;
        }

        self.write_errors(out)
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let stats = &self.result.stats;

        writeln!(out, "{RULE}")?;
        writeln!(out, "EMPTY FILES REPORT")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Total files scanned: {}", stats.total_files)?;
        writeln!(out, "Empty files found: {}", self.result.records.len())?;
        writeln!(out, "Completion rate: {:.1}%", stats.completion_rate())
    }

    fn write_locations<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let buckets = &self.result.classification.locations;

        writeln!(out)?;
        writeln!(out, "BY LOCATION:")?;
        for (category, indices) in buckets.non_empty() {
            writeln!(out, "  {}: {} files", category.label(), indices.len())?;
            for record in self.result.in_location(category).take(self.preview_limit) {
                writeln!(out, "    - {}", record.path)?;
            }
            if indices.len() > self.preview_limit {
                writeln!(
                    out,
                    "    ... and {} more",
                    indices.len() - self.preview_limit
                )?;
            }
        }
        Ok(())
    }

    fn write_file_types<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "BY FILE TYPE:")?;
        write_counts(out, &self.result.classification.file_types)
    }

    fn write_critical<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "CRITICAL EMPTY FILES (likely causing errors):")?;

        let mut any = false;
        for record in self.result.critical_records() {
            any = true;
            writeln!(out, "  ! {}", record.path)?;
        }
        if !any {
            writeln!(out, "  No critical files are empty")?;
        }
        Ok(())
    }

    fn write_errors<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let errors = &self.result.errors;
        if errors.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "SKIPPED ({} entries could not be read):", errors.len())?;
        for error in errors {
            writeln!(out, "  {error}")?;
        }
        Ok(())
    }
}

fn write_counts<W: Write, C: Category>(out: &mut W, buckets: &CategoryBuckets<C>) -> io::Result<()> {
    for (category, indices) in buckets.non_empty() {
        writeln!(out, "  {}: {} files", category.label(), indices.len())?;
    }
    Ok(())
}

/// Writes the startup banner.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Empty File Auditor")?;
    writeln!(out, "{RULE}")
}

/// Writes the closing checklist of what to do with the generated files.
pub fn write_next_steps<W: Write>(
    out: &mut W,
    report_path: &Utf8Path,
    todo_path: &Utf8Path,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Scan complete!")?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "1. Check {todo_path} for a checklist")?;
    writeln!(out, "2. Review {report_path} for detailed info")?;
    writeln!(out, "3. Fill critical files first (app.js, package.json, etc.)")
}
