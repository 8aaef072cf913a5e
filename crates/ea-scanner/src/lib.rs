//! Directory walker that finds and classifies zero-byte files.
//!
//! # Overview
//!
//! The main entry point is [`Scanner`], which combines:
//!
//! - [`FileWalker`]: Directory traversal with excluded-directory pruning
//! - [`Classification`]: Location and file-type buckets from `ea-core`
//! - [`ScanStats`]: Counters for the summary report
//!
//! # Example
//!
//! ```ignore
//! use ea_core::ScanConfig;
//! use ea_scanner::Scanner;
//!
//! let scanner = Scanner::new(&ScanConfig::default())?;
//! let result = scanner.scan()?;
//!
//! println!("{} of {} files are empty", result.stats.empty_files, result.stats.total_files);
//! for record in result.critical_records() {
//!     println!("Critical: {}", record.path);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Scanner
//!     │
//!     ├── FileWalker (walk + size check)
//!     │       │
//!     │       └── WalkBuilder (ignore crate)
//!     │
//!     └── Classification::from_records (pure bucketing)
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod stats;
mod walker;

pub use error::ScanError;
pub use stats::ScanStats;
pub use walker::{EXCLUDED_DIRECTORIES, FileWalker, WalkOutcome};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use ea_core::{
    Category, CategoryBuckets, Classification, EmptyFileRecord, LocationCategory, ScanConfig,
    rules,
};
use tracing::info;

/// Result of a scan operation.
///
/// Owns the records; the buckets in [`ScanResult::classification`] refer to
/// records by position in [`ScanResult::records`].
#[derive(Debug)]
pub struct ScanResult {
    /// Directory that was scanned.
    pub root: Utf8PathBuf,
    /// When the scan started.
    pub scanned_at: DateTime<Utc>,
    /// Counters from the walk.
    pub stats: ScanStats,
    /// Zero-byte files, in walk order.
    pub records: Vec<EmptyFileRecord>,
    /// Location and file-type buckets.
    pub classification: Classification,
    /// Non-fatal errors encountered during the walk.
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    /// Builds a result from a finished walk, classifying its records.
    #[must_use]
    pub fn from_outcome(
        root: Utf8PathBuf,
        scanned_at: DateTime<Utc>,
        outcome: WalkOutcome,
    ) -> Self {
        let classification = Classification::from_records(&outcome.records);

        Self {
            root,
            scanned_at,
            stats: outcome.stats,
            records: outcome.records,
            classification,
            errors: outcome.errors,
        }
    }

    /// Returns `true` if no empty files were found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolves bucket positions to records.
    pub fn resolve<'a>(
        &'a self,
        indices: &'a [usize],
    ) -> impl Iterator<Item = &'a EmptyFileRecord> + 'a {
        indices.iter().filter_map(|&index| self.records.get(index))
    }

    /// Records in a bucket, in walk order.
    pub fn bucket<'a, C: Category>(
        &'a self,
        buckets: &'a CategoryBuckets<C>,
        category: C,
    ) -> impl Iterator<Item = &'a EmptyFileRecord> + 'a {
        self.resolve(buckets.get(category))
    }

    /// Records in a location bucket.
    pub fn in_location(
        &self,
        category: LocationCategory,
    ) -> impl Iterator<Item = &EmptyFileRecord> + '_ {
        self.bucket(&self.classification.locations, category)
    }

    /// Records whose path matches a critical-file pattern.
    pub fn critical_records(&self) -> impl Iterator<Item = &EmptyFileRecord> + '_ {
        self.records
            .iter()
            .filter(|record| rules::is_critical(record.path.as_str()))
    }
}

/// Scans a directory tree for zero-byte files.
///
/// # Examples
///
/// ```ignore
/// use ea_core::ScanConfig;
/// use ea_scanner::Scanner;
///
/// let scanner = Scanner::new(&ScanConfig::default())?;
/// let result = scanner.scan()?;
/// println!("Scanned {} files", result.stats.total_files);
/// ```
#[derive(Debug)]
pub struct Scanner {
    walker: FileWalker,
}

impl Scanner {
    /// Creates a scanner for the configured root.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] or [`ScanError::NotADirectory`]
    /// when the root cannot be scanned. No traversal happens in that case.
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        let root = config.root();
        let walker = FileWalker::new(root)?
            .with_skip_dirs(config.extra_skip_dirs.as_slice())
            .with_follow_links(config.follow_links);

        info!(
            root = %root,
            extra_skip_dirs = config.extra_skip_dirs.len(),
            follow_links = config.follow_links,
            "Creating scanner"
        );

        Ok(Self { walker })
    }

    /// Returns the root directory being scanned.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        self.walker.root()
    }

    /// Walks the root and classifies every empty file found.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] if the root disappeared since the
    /// scanner was created. Per-file problems are collected in
    /// [`ScanResult::errors`] instead.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let root = self.root();
        if !root.is_dir() {
            return Err(ScanError::RootNotFound(root.to_owned()));
        }

        info!(root = %root, "Starting scan");
        let scanned_at = Utc::now();
        let outcome = self.walker.walk();

        info!(
            total = outcome.stats.total_files,
            empty = outcome.stats.empty_files,
            errors = outcome.stats.errors,
            "Scan complete"
        );

        Ok(ScanResult::from_outcome(root.to_owned(), scanned_at, outcome))
    }
}
