//! Source directory discovery.
//!
//! Lists the top level of the source directory and keeps the files whose
//! name matches a day's [`DayPattern`].

use std::path::Path;

use merge_core::error::{MergeError, Result};
use merge_core::naming::DayPattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::report::SourceFile;

/// Find the source files of `pattern`'s day, sorted into merge order.
///
/// Fails only when `source_dir` itself cannot be listed. Unreadable
/// individual entries and names that are not valid UTF-8 are skipped with a
/// warning.
pub fn scan_day(source_dir: &Path, pattern: &DayPattern) -> Result<Vec<SourceFile>> {
    let mut files: Vec<SourceFile> = Vec::new();

    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(MergeError::ScanDir {
                    path: source_dir.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", source_dir.display(), e);
                continue;
            }
        };

        let Some(file_name) = entry.file_name().to_str() else {
            warn!(
                "Skipping non UTF-8 file name {}",
                entry.file_name().to_string_lossy()
            );
            continue;
        };

        let Some(time_of_day) = pattern.time_of_day(file_name) else {
            continue;
        };

        if !entry.file_type().is_file() {
            debug!("Ignoring non-file entry {}", file_name);
            continue;
        }

        files.push(SourceFile {
            time_of_day: time_of_day.to_string(),
            file_name: file_name.to_string(),
        });
    }

    files.sort();

    debug!(
        "Found {} source files for {} in {}",
        files.len(),
        pattern.date(),
        source_dir.display()
    );

    Ok(files)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
