//! Configuration structures for the empty-file auditor.
//!
//! - [`ScanConfig`] - Traversal settings (root, extra skipped directories, links)
//! - [`OutputConfig`] - Where and how reports are written
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] and deserialize with
//! `#[serde(default)]`, so a configuration file only needs the keys it changes.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default file name of the JSON report.
pub const DEFAULT_REPORT_FILE: &str = "empty_files_report.json";

/// File name of the Markdown checklist. Not configurable.
pub const TODO_FILE: &str = "EMPTY_FILES_TODO.md";

/// Number of paths listed per location category in the console report.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Configuration for the directory scan.
///
/// # Examples
///
/// ```
/// use ea_core::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.root_path, None);
/// assert_eq!(config.root(), ".");
/// assert!(config.extra_skip_dirs.is_empty());
/// assert!(!config.follow_links);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directory to scan. Unset means the caller decides, falling back
    /// to the current directory.
    pub root_path: Option<Utf8PathBuf>,

    /// Directory names to prune in addition to the built-in denylist.
    pub extra_skip_dirs: Vec<String>,

    /// Whether to follow symbolic links while walking.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            extra_skip_dirs: Vec::new(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    /// Directory to scan, `.` when no root was set.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        self.root_path.as_deref().unwrap_or(Utf8Path::new("."))
    }
}

/// Configuration for report output.
///
/// # Examples
///
/// ```
/// use ea_core::OutputConfig;
///
/// let config = OutputConfig::default();
/// assert_eq!(config.report_path(), "./empty_files_report.json");
/// assert_eq!(config.todo_path(), "./EMPTY_FILES_TODO.md");
/// assert_eq!(config.preview_limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving both output files.
    pub output_dir: Utf8PathBuf,

    /// File name of the JSON report.
    pub report_file: String,

    /// Paths shown per location category before eliding the rest.
    pub preview_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: Utf8PathBuf::from("."),
            report_file: DEFAULT_REPORT_FILE.to_owned(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl OutputConfig {
    /// Full path of the JSON report.
    #[must_use]
    pub fn report_path(&self) -> Utf8PathBuf {
        self.output_dir.join(&self.report_file)
    }

    /// Full path of the Markdown checklist.
    #[must_use]
    pub fn todo_path(&self) -> Utf8PathBuf {
        self.output_dir.join(TODO_FILE)
    }
}

/// Root configuration for the auditor.
///
/// # Examples
///
/// ```
/// use ea_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("report_file"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan configuration.
    pub scan: ScanConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Checks option values that serde cannot reject on its own.
    ///
    /// The scan root is not checked here; the scanner reports a missing root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.report_file.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                option: "report_file".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }

        if let Some(name) = self
            .scan
            .extra_skip_dirs
            .iter()
            .find(|name| name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(ConfigError::InvalidOption {
                option: "extra_skip_dirs".to_owned(),
                reason: format!("'{name}' is not a plain directory name"),
            });
        }

        let dir = &self.output.output_dir;
        if !dir.exists() {
            return Err(ConfigError::MissingOutputDir(dir.clone()));
        }
        if !dir.is_dir() {
            return Err(ConfigError::OutputNotADirectory(dir.clone()));
        }

        Ok(())
    }
}
