//! Location and file-type categories.
//!
//! Both category sets are closed and ordered. The declaration order is the
//! order in which buckets are reported.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed, ordered set of categories that records can be bucketed into.
///
/// # Examples
///
/// ```
/// use ea_core::{Category, LocationCategory};
///
/// assert_eq!(LocationCategory::ALL.len(), 6);
/// assert_eq!(LocationCategory::Docs.index(), 3);
/// assert_eq!(LocationCategory::Docs.name(), "docs");
/// ```
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Every category, in reporting order.
    const ALL: &'static [Self];

    /// Position of this category within [`Category::ALL`].
    fn index(self) -> usize;

    /// Lower-case name, as used in serialized output.
    fn name(self) -> &'static str;

    /// Upper-case label for console output.
    fn label(self) -> String {
        self.name().to_uppercase()
    }
}

/// Where in the project tree an empty file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    /// Path starts with `backend`.
    Backend,
    /// Path starts with `frontend`.
    Frontend,
    /// Path starts with `database`.
    Database,
    /// Path starts with `docs`.
    Docs,
    /// Configuration file outside the known top-level areas.
    Config,
    /// Anything else.
    Other,
}

impl Category for LocationCategory {
    const ALL: &'static [Self] = &[
        Self::Backend,
        Self::Frontend,
        Self::Database,
        Self::Docs,
        Self::Config,
        Self::Other,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Database => "database",
            Self::Docs => "docs",
            Self::Config => "config",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What kind of file an empty file is, judged by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileTypeCategory {
    /// `.js`, `.mjs`, `.cjs`
    Javascript,
    /// `.jsx`, `.tsx`
    Jsx,
    /// `.sql`
    Sql,
    /// `.md`, `.txt`
    Markdown,
    /// `.json`
    Json,
    /// `.css`, `.scss`, `.sass`
    Css,
    /// Anything else.
    Other,
}

impl Category for FileTypeCategory {
    const ALL: &'static [Self] = &[
        Self::Javascript,
        Self::Jsx,
        Self::Sql,
        Self::Markdown,
        Self::Json,
        Self::Css,
        Self::Other,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Jsx => "jsx",
            Self::Sql => "sql",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Css => "css",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
