//! Filename schema shared with the data-collection app.
//!
//! The phone writes one file per interval named
//! `accelerometer_data_<YYYY-MM-DD>_<HH-MM-SS>.txt`; merged output is named
//! `merged_<DD-MM-YYYY>.txt`. Both date conventions must be kept exactly as
//! they are, existing dumps on disk depend on them.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::error::Result;

// ── Schema constants ──────────────────────────────────────────────────────────

/// Fixed prefix of every source file.
pub const SOURCE_PREFIX: &str = "accelerometer_data_";

/// Fixed suffix of every source file.
pub const SOURCE_EXTENSION: &str = ".txt";

/// Date format embedded in source filenames.
pub const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used for merged filenames, console output and CLI input.
pub const OUTPUT_DATE_FORMAT: &str = "%d-%m-%Y";

// ── MatchMode ─────────────────────────────────────────────────────────────────

/// How strictly a filename must match the per-day pattern.
#[derive(clap::ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The whole filename must match; `...09-00-00.txt.bak` is rejected.
    #[default]
    Exact,
    /// Only the start of the filename must match; trailing characters are
    /// tolerated, so `...09-00-00.txt.bak` is merged and deleted too.
    Prefix,
}

// ── DayPattern ────────────────────────────────────────────────────────────────

/// Compiled matcher for the source files of a single calendar day.
#[derive(Debug, Clone)]
pub struct DayPattern {
    date: NaiveDate,
    regex: Regex,
}

impl DayPattern {
    /// Build the matcher for `date`.
    ///
    /// The time-of-day portion is captured as exactly six digits grouped
    /// `HH-MM-SS`; it is never parsed into a time value.
    pub fn new(date: NaiveDate, mode: MatchMode) -> Result<Self> {
        let date_str = date.format(MATCH_DATE_FORMAT).to_string();
        let mut pattern = format!(
            r"^{}{}_(\d{{2}}-\d{{2}}-\d{{2}}){}",
            regex::escape(SOURCE_PREFIX),
            regex::escape(&date_str),
            regex::escape(SOURCE_EXTENSION),
        );
        if mode == MatchMode::Exact {
            pattern.push('$');
        }

        Ok(Self {
            date,
            regex: Regex::new(&pattern)?,
        })
    }

    /// Return the `HH-MM-SS` key when `file_name` belongs to this day.
    pub fn time_of_day<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.regex
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// ── Name builders ─────────────────────────────────────────────────────────────

/// `DD-MM-YYYY` rendering used in merged filenames and console messages.
pub fn output_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}

/// Name of the merged file for `date`, e.g. `merged_25-03-2025.txt`.
pub fn merged_file_name(date: NaiveDate) -> String {
    format!("merged_{}.txt", output_date(date))
}

/// Name the phone gives to the source file written on `date` at `time_of_day`.
pub fn source_file_name(date: NaiveDate, time_of_day: &str) -> String {
    format!(
        "{}{}_{}{}",
        SOURCE_PREFIX,
        date.format(MATCH_DATE_FORMAT),
        time_of_day,
        SOURCE_EXTENSION
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
