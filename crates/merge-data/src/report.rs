//! Per-day and per-run results of the merger.
//!
//! Deletion failures are values here rather than errors: once a file's
//! content is in the merged output, losing the original to a failed delete
//! is reported and the run carries on.

use std::path::PathBuf;

use chrono::NaiveDate;
use merge_core::dates::DateRange;
use merge_core::error::Result;
use merge_core::naming::{merged_file_name, output_date, MatchMode};
use serde::Serialize;

// ── SourceFile ────────────────────────────────────────────────────────────────

/// One matched source file of a day.
///
/// Field order gives the derived `Ord` the merge order: time-of-day first,
/// file name as tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SourceFile {
    /// `HH-MM-SS` key taken from the name, compared as a string.
    pub time_of_day: String,
    /// Full file name inside the source directory.
    pub file_name: String,
}

// ── DeletionOutcome ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeletionOutcome {
    Deleted { file_name: String },
    Failed { file_name: String, reason: String },
}

impl DeletionOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Deleted { file_name } | Self::Failed { file_name, .. } => file_name,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

// ── DayReport ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOutcome {
    /// Nothing matched; no output file was created.
    NoFiles,
    /// Sources were merged into `output_path`, then deleted one by one.
    Merged {
        output_path: PathBuf,
        merged: Vec<SourceFile>,
        deletions: Vec<DeletionOutcome>,
    },
}

/// What happened to a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub outcome: DayOutcome,
}

impl DayReport {
    pub fn no_files(date: NaiveDate) -> Self {
        Self {
            date,
            outcome: DayOutcome::NoFiles,
        }
    }

    pub fn merged_count(&self) -> usize {
        match &self.outcome {
            DayOutcome::NoFiles => 0,
            DayOutcome::Merged { merged, .. } => merged.len(),
        }
    }

    pub fn deleted_count(&self) -> usize {
        self.deletions().iter().filter(|d| d.is_deleted()).count()
    }

    /// Deletions that failed, in merge order.
    pub fn failures(&self) -> Vec<&DeletionOutcome> {
        self.deletions().iter().filter(|d| !d.is_deleted()).collect()
    }

    pub fn deletions(&self) -> &[DeletionOutcome] {
        match &self.outcome {
            DayOutcome::NoFiles => &[],
            DayOutcome::Merged { deletions, .. } => deletions,
        }
    }

    /// Progress lines for stdout, in the order the work happened.
    pub fn console_lines(&self) -> Vec<String> {
        match &self.outcome {
            DayOutcome::NoFiles => {
                vec![format!("No files found for {}", output_date(self.date))]
            }
            DayOutcome::Merged {
                merged, deletions, ..
            } => {
                let mut lines = Vec::with_capacity(deletions.len() + 1);
                lines.push(format!(
                    "Merged {} files into {}",
                    merged.len(),
                    merged_file_name(self.date)
                ));
                for deletion in deletions {
                    lines.push(match deletion {
                        DeletionOutcome::Deleted { file_name } => format!("Deleted {file_name}"),
                        DeletionOutcome::Failed { file_name, reason } => {
                            format!("Error deleting {file_name}: {reason}")
                        }
                    });
                }
                lines
            }
        }
    }
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Totals over a whole run, printed as JSON with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub range: DateRange,
    pub match_mode: MatchMode,
    pub days_scanned: usize,
    pub days_merged: usize,
    pub files_merged: usize,
    pub files_deleted: usize,
    pub deletion_failures: Vec<DeletionOutcome>,
}

impl RunSummary {
    pub fn new(range: DateRange, match_mode: MatchMode) -> Self {
        Self {
            range,
            match_mode,
            days_scanned: 0,
            days_merged: 0,
            files_merged: 0,
            files_deleted: 0,
            deletion_failures: Vec::new(),
        }
    }

    /// Fold one finished day into the totals.
    pub fn record(&mut self, day: &DayReport) {
        self.days_scanned += 1;
        if let DayOutcome::Merged { .. } = day.outcome {
            self.days_merged += 1;
        }
        self.files_merged += day.merged_count();
        self.files_deleted += day.deleted_count();
        self.deletion_failures
            .extend(day.failures().into_iter().cloned());
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
