//! File layer for accel-merge.
//!
//! Discovers a day's source files, concatenates them into the merged
//! output, deletes the originals and reports per-day and per-run results.

pub mod merger;
pub mod report;
pub mod runner;
pub mod scanner;

pub use merge_core as core;
