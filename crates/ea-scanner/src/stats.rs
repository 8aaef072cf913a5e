//! Scan statistics.
//!
//! [`ScanStats`] is filled in while walking and copied into the
//! [`ScanResult`](crate::ScanResult) once the walk finishes.

/// Counters collected during a scan.
///
/// # Examples
///
/// ```
/// use ea_scanner::ScanStats;
///
/// let stats = ScanStats {
///     total_files: 200,
///     empty_files: 10,
///     errors: 0,
/// };
///
/// assert!((stats.completion_rate() - 95.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    /// Files visited, empty or not, including ones whose size could not be read.
    pub total_files: u64,
    /// Files with a size of exactly zero bytes.
    pub empty_files: u64,
    /// Entries skipped because of a recoverable error.
    pub errors: u64,
}

impl ScanStats {
    /// Creates a new [`ScanStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the visited files counter.
    #[inline]
    pub fn increment_total(&mut self) {
        self.total_files += 1;
    }

    /// Increments the empty files counter.
    #[inline]
    pub fn increment_empty(&mut self) {
        self.empty_files += 1;
    }

    /// Increments the error counter.
    #[inline]
    pub fn increment_errors(&mut self) {
        self.errors += 1;
    }

    /// Number of visited files that have content.
    #[inline]
    #[must_use]
    pub const fn non_empty_files(&self) -> u64 {
        self.total_files.saturating_sub(self.empty_files)
    }

    /// Returns the share of visited files that have content, as a percentage.
    ///
    /// Calculated as: `(total - empty) / total * 100`
    /// Returns 100.0 if no files were visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ea_scanner::ScanStats;
    ///
    /// assert!((ScanStats::default().completion_rate() - 100.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for statistics display
    pub fn completion_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 100.0;
        }

        (self.non_empty_files() as f64 / self.total_files as f64) * 100.0
    }
}
