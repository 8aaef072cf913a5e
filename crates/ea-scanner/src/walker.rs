//! Directory traversal for zero-byte files.
//!
//! This module provides [`FileWalker`], which uses the `ignore` crate to walk
//! the scan root and read the size of every file it finds.
//!
//! # Behavior
//!
//! - Prunes excluded directories before descending into them
//! - Does not honour `.gitignore` and does not skip hidden files
//! - Reads sizes through symlinks, like `stat`
//! - Keeps going after per-entry failures, collecting them as [`ScanError`]s
//!
//! # Examples
//!
//! ```ignore
//! use ea_scanner::FileWalker;
//! use camino::Utf8Path;
//!
//! let walker = FileWalker::new(Utf8Path::new("./project"))?;
//! let outcome = walker.walk();
//!
//! for record in &outcome.records {
//!     println!("Empty: {}", record.path);
//! }
//! ```

use std::ffi::OsStr;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use ea_core::EmptyFileRecord;
use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, warn};

use crate::error::ScanError;
use crate::stats::ScanStats;

/// Directory names that are never descended into.
pub const EXCLUDED_DIRECTORIES: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    "__pycache__",
    "dist",
    "build",
    ".next",
    "coverage",
    ".nyc_output",
];

/// Everything a single walk produced.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Zero-byte files, in walk order.
    pub records: Vec<EmptyFileRecord>,
    /// Counters for the walk.
    pub stats: ScanStats,
    /// Entries that were skipped because of an error.
    pub errors: Vec<ScanError>,
}

/// A file walker that finds zero-byte files in a directory tree.
///
/// Walk order is whatever the operating system reports; callers must not
/// rely on it being sorted.
#[derive(Debug)]
pub struct FileWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Additional directories to skip (beyond [`EXCLUDED_DIRECTORIES`]).
    skip_dirs: Vec<String>,
    /// Whether to follow symbolic links.
    follow_links: bool,
}

impl FileWalker {
    /// Creates a new file walker for the given root directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] if the root doesn't exist and
    /// [`ScanError::NotADirectory`] if it isn't a directory.
    pub fn new(root: &Utf8Path) -> Result<Self, ScanError> {
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.to_owned()));
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_owned()));
        }

        Ok(Self {
            root: root.to_owned(),
            skip_dirs: Vec::new(),
            follow_links: false,
        })
    }

    /// Adds directory names to skip during traversal.
    ///
    /// These are in addition to [`EXCLUDED_DIRECTORIES`].
    #[must_use]
    pub fn with_skip_dirs<S: AsRef<str>>(mut self, dirs: &[S]) -> Self {
        self.skip_dirs
            .extend(dirs.iter().map(|dir| dir.as_ref().to_owned()));
        self
    }

    /// Configures whether to follow symbolic links.
    ///
    /// By default, symbolic links are not followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Returns the root directory being walked.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Walks the tree and records every zero-byte file.
    ///
    /// Never fails as a whole: unreadable entries are logged, counted, and
    /// returned in [`WalkOutcome::errors`].
    pub fn walk(&self) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();

        for result in self.build_walker() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable entry");
                    outcome.stats.increment_errors();
                    outcome.errors.push(ScanError::Walk(err));
                    continue;
                }
            };

            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }

            self.visit_file(&entry, &mut outcome);
        }

        outcome
    }

    fn visit_file(&self, entry: &DirEntry, outcome: &mut WalkOutcome) {
        let path = entry.path();

        let Some(utf8_path) = Utf8Path::from_path(path) else {
            warn!(path = %path.display(), "Skipping non-UTF-8 path");
            outcome.stats.increment_total();
            outcome.stats.increment_errors();
            outcome.errors.push(ScanError::NonUtf8Path(path.to_owned()));
            return;
        };
        let relative = self.relative_path(utf8_path);

        // `fs::metadata` follows symlinks; a dangling link surfaces as an error.
        match fs::metadata(path) {
            // Symlinked directory that the walker did not descend into.
            Ok(meta) if meta.is_dir() => {}
            Ok(meta) => {
                outcome.stats.increment_total();
                if meta.len() == 0 {
                    debug!(path = %relative, "Empty file");
                    outcome.stats.increment_empty();
                    outcome
                        .records
                        .push(EmptyFileRecord::new(&self.root, relative));
                }
            }
            Err(source) => {
                warn!(path = %relative, error = %source, "Failed to read file size");
                outcome.stats.increment_total();
                outcome.stats.increment_errors();
                outcome.errors.push(ScanError::metadata(relative, source));
            }
        }
    }

    /// Strips the root from a walked path.
    fn relative_path<'a>(&self, path: &'a Utf8Path) -> &'a Utf8Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Builds the ignore walker with configured settings.
    fn build_walker(&self) -> ignore::Walk {
        let skip_dirs = self.skip_dirs.clone();

        WalkBuilder::new(&self.root)
            // Plain recursive walk: no .gitignore, no hidden-file filtering
            .standard_filters(false)
            .follow_links(self.follow_links)
            // Prune before descending; the root itself is never pruned
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && entry.depth() > 0 && is_excluded(entry.file_name(), &skip_dirs))
            })
            .build()
    }
}

/// Checks a directory name against the fixed denylist and any extra names.
fn is_excluded(name: &OsStr, skip_dirs: &[String]) -> bool {
    name.to_str().is_some_and(|name| {
        EXCLUDED_DIRECTORIES.contains(&name) || skip_dirs.iter().any(|dir| dir == name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp directory")
    }

    fn utf8_root(temp_dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp_dir.path()).expect("Invalid path")
    }

    fn touch(root: &Utf8Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    fn sorted_paths(outcome: &WalkOutcome) -> Vec<String> {
        let mut paths: Vec<String> = outcome
            .records
            .iter()
            .map(|record| record.path.as_str().replace('\\', "/"))
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_is_excluded() {
        for name in EXCLUDED_DIRECTORIES {
            assert!(is_excluded(OsStr::new(name), &[]), "{name}");
        }
        assert!(is_excluded(OsStr::new("vendor"), &["vendor".to_owned()]));
        assert!(!is_excluded(OsStr::new("src"), &[]));
        assert!(!is_excluded(OsStr::new("node_modules_backup"), &[]));
    }

    #[test]
    fn test_new_missing_root() {
        let result = FileWalker::new(Utf8Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(matches!(result, Err(ScanError::RootNotFound(_))));
    }

    #[test]
    fn test_new_root_is_file() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "file.txt", "x");

        let result = FileWalker::new(&root.join("file.txt"));
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn test_with_skip_dirs() {
        let temp_dir = create_temp_dir();
        let walker = FileWalker::new(utf8_root(&temp_dir))
            .expect("Failed to create walker")
            .with_skip_dirs(&["vendor", "third_party"]);

        assert!(walker.skip_dirs.contains(&"vendor".to_owned()));
        assert!(walker.skip_dirs.contains(&"third_party".to_owned()));
    }

    #[test]
    fn test_with_follow_links() {
        let temp_dir = create_temp_dir();
        let walker = FileWalker::new(utf8_root(&temp_dir))
            .expect("Failed to create walker")
            .with_follow_links(true);

        assert!(walker.follow_links);
    }

    #[test]
    fn test_walk_finds_only_empty_files() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "backend/server.js", "");
        touch(root, "frontend/App.jsx", "0123456789");
        touch(root, "docs/README.md", "");

        let outcome = FileWalker::new(root).expect("Failed to create walker").walk();

        assert_eq!(
            sorted_paths(&outcome),
            vec!["backend/server.js", "docs/README.md"]
        );
        assert_eq!(outcome.stats.total_files, 3);
        assert_eq!(outcome.stats.empty_files, 2);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_walk_prunes_excluded_directories_at_any_depth() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "node_modules/lib/index.js", "");
        touch(root, "frontend/node_modules/pkg/index.js", "");
        touch(root, "a/b/c/.git/HEAD", "");
        touch(root, "backend/coverage/lcov.info", "");
        touch(root, "backend/keep.js", "");

        let outcome = FileWalker::new(root).expect("Failed to create walker").walk();

        assert_eq!(sorted_paths(&outcome), vec!["backend/keep.js"]);
        // Pruned directories are never entered, so their files are not counted.
        assert_eq!(outcome.stats.total_files, 1);
    }

    #[test]
    fn test_walk_extra_skip_dirs() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "vendor/empty.js", "");
        touch(root, "src/empty.js", "");

        let outcome = FileWalker::new(root)
            .expect("Failed to create walker")
            .with_skip_dirs(&["vendor"])
            .walk();

        assert_eq!(sorted_paths(&outcome), vec!["src/empty.js"]);
    }

    #[test]
    fn test_walk_includes_hidden_and_ignored_files() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, ".gitignore", "*.log\n");
        touch(root, "backend/.env", "");
        touch(root, "debug.log", "");

        let outcome = FileWalker::new(root).expect("Failed to create walker").walk();

        assert_eq!(sorted_paths(&outcome), vec!["backend/.env", "debug.log"]);
        assert_eq!(outcome.stats.total_files, 3);
    }

    #[test]
    fn test_walk_does_not_prune_root_named_like_excluded_dir() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "build/out.txt", "");

        let outcome = FileWalker::new(&root.join("build"))
            .expect("Failed to create walker")
            .walk();

        assert_eq!(sorted_paths(&outcome), vec!["out.txt"]);
    }

    #[test]
    fn test_walk_record_paths() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "database/migrations/001_init.SQL", "");

        let outcome = FileWalker::new(root).expect("Failed to create walker").walk();

        let record = &outcome.records[0];
        assert_eq!(record.full_path, root.join(&record.path));
        assert_eq!(record.filename, "001_init.SQL");
        assert_eq!(record.extension, ".sql");
        assert_eq!(
            Utf8Path::new(&record.directory),
            Utf8Path::new("database").join("migrations")
        );
    }

    #[test]
    fn test_walk_empty_root() {
        let temp_dir = create_temp_dir();
        let outcome = FileWalker::new(utf8_root(&temp_dir))
            .expect("Failed to create walker")
            .walk();

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.stats, ScanStats::default());
    }

    #[test]
    fn test_walk_is_repeatable() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "a.txt", "");
        touch(root, "b/c.txt", "");
        touch(root, "b/d.txt", "full");

        let walker = FileWalker::new(root).expect("Failed to create walker");
        assert_eq!(sorted_paths(&walker.walk()), sorted_paths(&walker.walk()));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_continues_past_broken_symlink() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "docs/empty.md", "");
        std::os::unix::fs::symlink(root.join("missing.txt"), root.join("dangling"))
            .expect("Failed to create symlink");

        let outcome = FileWalker::new(root).expect("Failed to create walker").walk();

        assert_eq!(sorted_paths(&outcome), vec!["docs/empty.md"]);
        assert_eq!(outcome.stats.total_files, 2);
        assert_eq!(outcome.stats.errors, 1);
        assert!(matches!(
            outcome.errors.as_slice(),
            [ScanError::Metadata { path, .. }] if path.as_str() == "dangling"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_continues_past_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "locked/hidden.txt", "");
        touch(root, "open/empty.txt", "");
        touch(root, "top.txt", "");

        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
            .expect("Failed to change permissions");
        // Permission bits do not apply to root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
                .expect("Failed to restore permissions");
            return;
        }

        let outcome = FileWalker::new(root).expect("Failed to create walker").walk();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("Failed to restore permissions");

        assert_eq!(sorted_paths(&outcome), vec!["open/empty.txt", "top.txt"]);
        assert_eq!(outcome.stats.total_files, 2);
        assert_eq!(outcome.stats.errors, 1);
        assert!(matches!(outcome.errors.as_slice(), [ScanError::Walk(_)]));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_count_symlinked_directory() {
        let temp_dir = create_temp_dir();
        let root = utf8_root(&temp_dir);
        touch(root, "real/empty.txt", "");
        std::os::unix::fs::symlink(root.join("real"), root.join("alias"))
            .expect("Failed to create symlink");

        let outcome = FileWalker::new(root).expect("Failed to create walker").walk();

        assert_eq!(sorted_paths(&outcome), vec!["real/empty.txt"]);
        assert_eq!(outcome.stats.total_files, 1);
    }
}
