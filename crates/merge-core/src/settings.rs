use std::ffi::OsString;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::dates::{parse_cli_date, DateRange};
use crate::error::Result;
use crate::naming::MatchMode;

// ── Defaults ───────────────────────────────────────────────────────────────────

/// Where the phone dump is copied to before merging.
pub const DEFAULT_SOURCE_DIR: &str = "./accelerometer_data_from_phone";

/// First day of the collection campaign (`DD-MM-YYYY`).
pub const DEFAULT_START_DATE: &str = "25-03-2025";

/// Last day of the collection campaign (`DD-MM-YYYY`).
pub const DEFAULT_END_DATE: &str = "04-04-2025";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Merge per-interval accelerometer logs into one file per day
#[derive(Parser, Debug, Clone)]
#[command(
    name = "accel-merge",
    about = "Merge per-interval accelerometer logs into one file per day",
    version
)]
pub struct Settings {
    /// Directory holding the accelerometer_data_*.txt files
    #[arg(long, env = "ACCEL_MERGE_SOURCE_DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Directory the merged_*.txt files are written to
    #[arg(long, env = "ACCEL_MERGE_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// First day to merge (DD-MM-YYYY)
    #[arg(long, default_value = DEFAULT_START_DATE, value_parser = parse_cli_date)]
    pub start_date: NaiveDate,

    /// Last day to merge, inclusive (DD-MM-YYYY)
    #[arg(long, default_value = DEFAULT_END_DATE, value_parser = parse_cli_date)]
    pub end_date: NaiveDate,

    /// Filename matching strictness
    #[arg(long, value_enum, default_value_t = MatchMode::Exact)]
    pub match_mode: MatchMode,

    /// Print a JSON run summary after the progress lines
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process command line.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// The configured inclusive date range.
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
