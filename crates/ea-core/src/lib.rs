//! Core types, rule tables, and configuration for the empty-file auditor.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`EmptyFileRecord`] for a single zero-byte file found by a scan
//! - [`LocationCategory`] and [`FileTypeCategory`] with their [`Category`] trait
//! - [`CategoryBuckets`] and [`Classification`] for grouping records
//! - The fixed classification tables in [`rules`]
//! - Configuration structures ([`Config`], [`ScanConfig`], [`OutputConfig`])
//! - [`ConfigError`] for configuration failures

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod rules;
pub mod types;

pub use config::{
    Config, DEFAULT_PREVIEW_LIMIT, DEFAULT_REPORT_FILE, OutputConfig, ScanConfig, TODO_FILE,
};
pub use error::ConfigError;
pub use types::{
    Category, CategoryBuckets, Classification, EmptyFileRecord, FileTypeCategory,
    LocationCategory,
};
