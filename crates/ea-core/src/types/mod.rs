//! Domain types for the empty-file auditor.
//!
//! # Module Organization
//!
//! - [`record`] - A single zero-byte file found by a scan
//! - [`category`] - Location and file-type categories
//! - [`buckets`] - Grouping records by category
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use ea_core::{EmptyFileRecord, LocationCategory, CategoryBuckets};
//! ```

mod buckets;
mod category;
mod record;

pub use buckets::{CategoryBuckets, Classification};
pub use category::{Category, FileTypeCategory, LocationCategory};
pub use record::EmptyFileRecord;
