//! Fixed classification tables.
//!
//! Every rule is first-match-wins, evaluated in table order. The tables are
//! plain data so they can be tested and extended without touching the
//! matching code.

use crate::types::{EmptyFileRecord, FileTypeCategory, LocationCategory};

/// Path prefixes that decide the location category, in priority order.
///
/// Matching is on the raw path string, so `backend_old/x.js` is `backend`.
pub const LOCATION_PREFIXES: &[(&str, LocationCategory)] = &[
    ("backend", LocationCategory::Backend),
    ("frontend", LocationCategory::Frontend),
    ("database", LocationCategory::Database),
    ("docs", LocationCategory::Docs),
];

/// Extensions that mark a file as configuration when no prefix matched.
pub const CONFIG_EXTENSIONS: &[&str] = &[".json", ".yml", ".yaml", ".env", ".config"];

/// Extensions that decide the file-type category, in priority order.
pub const FILE_TYPE_EXTENSIONS: &[(FileTypeCategory, &[&str])] = &[
    (FileTypeCategory::Javascript, &[".js", ".mjs", ".cjs"]),
    (FileTypeCategory::Jsx, &[".jsx", ".tsx"]),
    (FileTypeCategory::Sql, &[".sql"]),
    (FileTypeCategory::Markdown, &[".md", ".txt"]),
    (FileTypeCategory::Json, &[".json"]),
    (FileTypeCategory::Css, &[".css", ".scss", ".sass"]),
];

/// Substrings that flag a path as critical.
///
/// This is loose substring matching on the lower-cased relative path:
/// `myapp.jsx` matches `app.jsx`.
pub const CRITICAL_PATTERNS: &[&str] = &[
    "app.js",
    "server.js",
    "main.jsx",
    "app.jsx",
    "index.js",
    "package.json",
    "vite.config",
    "tailwind.config",
];

fn extension_in(extension: &str, set: &[&str]) -> bool {
    set.iter().any(|candidate| candidate.eq_ignore_ascii_case(extension))
}

/// Location category of a record.
///
/// # Examples
///
/// ```
/// use ea_core::{EmptyFileRecord, LocationCategory, rules};
/// use camino::Utf8Path;
///
/// let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("docs/api.json"));
/// assert_eq!(rules::location_of(&record), LocationCategory::Docs);
///
/// let record = EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("config/app.yml"));
/// assert_eq!(rules::location_of(&record), LocationCategory::Config);
/// ```
#[must_use]
pub fn location_of(record: &EmptyFileRecord) -> LocationCategory {
    location_for(record.path.as_str(), &record.extension)
}

/// Location category for a relative path and its extension.
#[must_use]
pub fn location_for(path: &str, extension: &str) -> LocationCategory {
    LOCATION_PREFIXES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|&(_, category)| category)
        .unwrap_or_else(|| {
            if extension_in(extension, CONFIG_EXTENSIONS) {
                LocationCategory::Config
            } else {
                LocationCategory::Other
            }
        })
}

/// File-type category for an extension (with leading dot).
///
/// # Examples
///
/// ```
/// use ea_core::{FileTypeCategory, rules};
///
/// assert_eq!(rules::file_type_of(".tsx"), FileTypeCategory::Jsx);
/// assert_eq!(rules::file_type_of(".ts"), FileTypeCategory::Other);
/// ```
#[must_use]
pub fn file_type_of(extension: &str) -> FileTypeCategory {
    FILE_TYPE_EXTENSIONS
        .iter()
        .find(|(_, set)| extension_in(extension, set))
        .map_or(FileTypeCategory::Other, |&(category, _)| category)
}

/// Returns `true` if the path contains any [`CRITICAL_PATTERNS`] entry,
/// ignoring case.
///
/// # Examples
///
/// ```
/// use ea_core::rules;
///
/// assert!(rules::is_critical("backend/Server.js"));
/// assert!(rules::is_critical("frontend/myapp.jsx"));
/// assert!(!rules::is_critical("backend/routes/users.js"));
/// ```
#[must_use]
pub fn is_critical(path: &str) -> bool {
    let lowered = path.to_lowercase();
    CRITICAL_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}
