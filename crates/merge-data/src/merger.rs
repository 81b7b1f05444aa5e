//! The per-day merge: scan, concatenate, then delete the originals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use merge_core::error::{MergeError, Result};
use merge_core::naming::{merged_file_name, output_date, DayPattern, MatchMode};
use merge_core::settings::Settings;
use tracing::{debug, info, warn};

use crate::report::{DayOutcome, DayReport, DeletionOutcome, SourceFile};
use crate::scanner::scan_day;

// ── MergeConfig ───────────────────────────────────────────────────────────────

/// Everything [`merge_day`] needs besides the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub match_mode: MatchMode,
}

impl From<&Settings> for MergeConfig {
    fn from(s: &Settings) -> Self {
        MergeConfig {
            source_dir: s.source_dir.clone(),
            output_dir: s.output_dir.clone(),
            match_mode: s.match_mode,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Merge every source file of `date` into `merged_<DD-MM-YYYY>.txt`.
///
/// Sources are only deleted after the output has been written and flushed.
/// Scan, read and write failures propagate; a partially written output file
/// is left where it is. Delete failures are recorded in the report.
pub fn merge_day(date: NaiveDate, config: &MergeConfig) -> Result<DayReport> {
    let pattern = DayPattern::new(date, config.match_mode)?;
    let files = scan_day(&config.source_dir, &pattern)?;

    if files.is_empty() {
        debug!("No source files for {}", output_date(date));
        return Ok(DayReport::no_files(date));
    }

    let output_path = config.output_dir.join(merged_file_name(date));
    write_merged(&output_path, &config.source_dir, &files)?;
    info!(
        "Merged {} files for {} into {}",
        files.len(),
        output_date(date),
        output_path.display()
    );

    let deletions = delete_sources(&config.source_dir, &files);

    Ok(DayReport {
        date,
        outcome: DayOutcome::Merged {
            output_path,
            merged: files,
            deletions,
        },
    })
}

/// Create or truncate `output_path` and append each source in order,
/// each followed by a single `\n`. Content is copied as opaque bytes.
pub fn write_merged(output_path: &Path, source_dir: &Path, files: &[SourceFile]) -> Result<()> {
    let write_err = |source: std::io::Error| MergeError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(output_path).map_err(write_err)?);

    for file in files {
        let path = source_dir.join(&file.file_name);
        let content = std::fs::read(&path).map_err(|source| MergeError::ReadSource {
            path: path.clone(),
            source,
        })?;
        writer.write_all(&content).map_err(write_err)?;
        writer.write_all(b"\n").map_err(write_err)?;
        debug!("Appended {} ({} bytes)", file.file_name, content.len());
    }

    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Remove each merged source, recording the outcome per file.
///
/// Never fails as a whole: a file that cannot be removed is logged and the
/// next one is attempted.
pub fn delete_sources(source_dir: &Path, files: &[SourceFile]) -> Vec<DeletionOutcome> {
    files
        .iter()
        .map(|file| {
            let path = source_dir.join(&file.file_name);
            match std::fs::remove_file(&path) {
                Ok(()) => {
                    debug!("Deleted {}", path.display());
                    DeletionOutcome::Deleted {
                        file_name: file.file_name.clone(),
                    }
                }
                Err(e) => {
                    warn!("Failed to delete {}: {}", path.display(), e);
                    DeletionOutcome::Failed {
                        file_name: file.file_name.clone(),
                        reason: e.to_string(),
                    }
                }
            }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
