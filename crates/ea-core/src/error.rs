//! Configuration errors.

use camino::Utf8PathBuf;

/// Problems with the config file or with the settings it (and the CLI)
/// produced.
///
/// # Examples
///
/// ```
/// use ea_core::ConfigError;
/// use camino::Utf8PathBuf;
///
/// let error = ConfigError::MissingOutputDir(Utf8PathBuf::from("reports"));
/// assert_eq!(error.to_string(), "output directory 'reports' does not exist");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`Config`](crate::Config).
    #[error("config file {path} is malformed: {source}")]
    Parse {
        /// Path of the config file.
        path: Utf8PathBuf,
        /// The JSON error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// Reports would be written into a directory that does not exist.
    #[error("output directory '{0}' does not exist")]
    MissingOutputDir(Utf8PathBuf),

    /// The output location exists but is a file.
    #[error("output location '{0}' is not a directory")]
    OutputNotADirectory(Utf8PathBuf),

    /// A setting has a value the auditor cannot use.
    #[error("invalid value for '{option}': {reason}")]
    InvalidOption {
        /// Config key or CLI flag name.
        option: String,
        /// What is wrong with the value.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_display() {
        let error = ConfigError::Read {
            path: Utf8PathBuf::from("audit.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "failed to read config file audit.json: not found"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = ConfigError::Parse {
            path: Utf8PathBuf::from("audit.json"),
            source,
        };
        assert!(
            error
                .to_string()
                .starts_with("config file audit.json is malformed: ")
        );
    }

    #[test]
    fn test_output_dir_errors_name_the_directory() {
        let missing = ConfigError::MissingOutputDir(Utf8PathBuf::from("out/reports"));
        assert_eq!(
            missing.to_string(),
            "output directory 'out/reports' does not exist"
        );

        let not_dir = ConfigError::OutputNotADirectory(Utf8PathBuf::from("notes.txt"));
        assert_eq!(
            not_dir.to_string(),
            "output location 'notes.txt' is not a directory"
        );
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::InvalidOption {
            option: "report_file".to_owned(),
            reason: "must not be empty".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "invalid value for 'report_file': must not be empty"
        );
    }
}
