use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// All errors produced while merging sensor logs.
///
/// Only merge-phase failures live here. Failures to delete a source file
/// after it was merged are reported per file and never become a
/// `MergeError`.
#[derive(Error, Debug)]
pub enum MergeError {
    /// The source directory could not be listed.
    #[error("Failed to scan directory {path}: {source}")]
    ScanDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched source file could not be opened or read.
    #[error("Failed to read file {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The merged output file could not be created or written.
    #[error("Failed to write file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A date string was not in `DD-MM-YYYY` form.
    #[error("Invalid date (expected DD-MM-YYYY): {0}")]
    InvalidDate(String),

    /// The configured range ends before it starts.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The per-day filename pattern failed to compile.
    #[error("Invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A run summary could not be serialized.
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the merge crates.
pub type Result<T> = std::result::Result<T, MergeError>;
