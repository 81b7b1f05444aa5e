//! Core types for accel-merge.
//!
//! Holds the error type, command-line settings, the on-disk filename schema
//! and the inclusive date range the merger walks.

pub mod dates;
pub mod error;
pub mod naming;
pub mod settings;
