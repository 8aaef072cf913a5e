//! Markdown checklist of empty files, grouped by directory.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use camino::Utf8Path;
use ea_core::EmptyFileRecord;
use tracing::info;

use crate::error::ReportError;

/// Heading used for files directly under the scan root.
pub const ROOT_HEADING: &str = "Root";

/// Renders the checklist.
///
/// Directories are sorted; files keep their walk order within a directory.
///
/// # Examples
///
/// ```
/// use ea_core::EmptyFileRecord;
/// use ea_report::render_checklist;
/// use camino::Utf8Path;
///
/// let records = vec![EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("a.txt"))];
/// let markdown = render_checklist(&records);
///
/// assert!(markdown.contains("## Root\n\n- [ ] a.txt\n"));
/// ```
#[must_use]
pub fn render_checklist(records: &[EmptyFileRecord]) -> String {
    // `None` is the scan root and sorts ahead of every directory.
    let mut by_directory: BTreeMap<Option<&str>, Vec<&EmptyFileRecord>> = BTreeMap::new();
    for record in records {
        let directory = (!record.is_root_level()).then_some(record.directory.as_str());
        by_directory.entry(directory).or_default().push(record);
    }

    let mut output = String::from("# Empty Files TODO List\n\n");
    // Writing to a String cannot fail.
    let _ = writeln!(
        output,
        "Found {} empty files that need content:\n",
        records.len()
    );

    for (directory, files) in by_directory {
        let heading = directory.unwrap_or(ROOT_HEADING);
        let _ = writeln!(output, "## {heading}\n");
        for record in files {
            let _ = writeln!(output, "- [ ] {}", record.filename);
        }
        output.push('\n');
    }

    output
}

/// Writes the checklist, replacing any existing file.
pub fn write_checklist(records: &[EmptyFileRecord], path: &Utf8Path) -> Result<(), ReportError> {
    std::fs::write(path, render_checklist(records))
        .map_err(|source| ReportError::write(path, source))?;
    info!(path = %path, records = records.len(), "Checklist written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn records(paths: &[&str]) -> Vec<EmptyFileRecord> {
        paths
            .iter()
            .map(|path| EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new(path)))
            .collect()
    }

    #[test]
    fn test_checklist_groups_and_sorts_directories() {
        let records = records(&[
            "frontend/src/main.jsx",
            "backend/server.js",
            "README.md",
            "backend/app.js",
        ]);

        insta::assert_snapshot!(render_checklist(&records), @r"
# Empty Files TODO List

Found 4 empty files that need content:

## Root

- [ ] README.md

## backend

- [ ] server.js
- [ ] app.js

## frontend/src

- [ ] main.jsx
");
    }

    #[test]
    fn test_checklist_root_heading_sorts_first() {
        let markdown = render_checklist(&records(&["Backend/a.js", "z.txt", "api/b.js"]));

        let root = markdown.find("## Root").expect("Missing root heading");
        let upper = markdown.find("## Backend").expect("Missing Backend heading");
        let lower = markdown.find("## api").expect("Missing api heading");
        assert!(root < upper && upper < lower);
    }

    #[test]
    fn test_checklist_without_records() {
        let markdown = render_checklist(&[]);
        assert_eq!(
            markdown,
            "# Empty Files TODO List\n\nFound 0 empty files that need content:\n\n"
        );
    }

    #[test]
    fn test_checklist_ends_each_group_with_blank_line() {
        let markdown = render_checklist(&records(&["docs/a.md"]));
        assert!(markdown.ends_with("## docs\n\n- [ ] a.md\n\n"));
    }

    #[test]
    fn test_write_checklist_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("EMPTY_FILES_TODO.md"))
            .expect("Invalid path");
        std::fs::write(&path, "old").unwrap();

        write_checklist(&records(&["docs/a.md"]), &path).expect("Write failed");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Empty Files TODO List"));
        assert!(content.contains("- [ ] a.md"));
    }
}
