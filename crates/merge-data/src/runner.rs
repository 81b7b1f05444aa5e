use merge_core::dates::DateRange;
use merge_core::error::Result;
use tracing::info;

use crate::merger::{merge_day, MergeConfig};
use crate::report::{DayReport, RunSummary};

/// Merge every day of `range` in calendar order.
///
/// `on_day` sees each [`DayReport`] as soon as that day is done, so progress
/// for earlier days is already reported when a later day fails.
pub fn run_range<F>(range: &DateRange, config: &MergeConfig, mut on_day: F) -> Result<RunSummary>
where
    F: FnMut(&DayReport),
{
    info!(
        "Merging {} days ({} to {}) from {}",
        range.len(),
        range.start,
        range.end,
        config.source_dir.display()
    );

    let mut summary = RunSummary::new(*range, config.match_mode);
    for date in range.days() {
        let report = merge_day(date, config)?;
        on_day(&report);
        summary.record(&report);
    }

    info!(
        "Done: {} files merged over {} days, {} deleted, {} delete failures",
        summary.files_merged,
        summary.days_merged,
        summary.files_deleted,
        summary.deletion_failures.len()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use merge_core::error::MergeError;
    use merge_core::naming::{source_file_name, MatchMode};
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(tmp: &TempDir) -> MergeConfig {
        MergeConfig {
            source_dir: tmp.path().to_path_buf(),
            output_dir: tmp.path().to_path_buf(),
            match_mode: MatchMode::Exact,
        }
    }

    #[test]
    fn test_run_range_reports_every_day_in_order() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(source_file_name(ymd(2025, 3, 31), "12-00-00")), b"m").unwrap();
        std::fs::write(tmp.path().join(source_file_name(ymd(2025, 4, 1), "12-00-00")), b"a").unwrap();

        let range = DateRange::new(ymd(2025, 3, 30), ymd(2025, 4, 2)).unwrap();
        let mut seen = Vec::new();
        let summary = run_range(&range, &config(&tmp), |day| seen.push((day.date, day.merged_count())))
            .unwrap();

        assert_eq!(
            seen,
            vec![
                (ymd(2025, 3, 30), 0),
                (ymd(2025, 3, 31), 1),
                (ymd(2025, 4, 1), 1),
                (ymd(2025, 4, 2), 0),
            ]
        );
        assert_eq!(summary.days_scanned, 4);
        assert_eq!(summary.days_merged, 2);
        assert_eq!(summary.files_merged, 2);
        assert_eq!(summary.files_deleted, 2);
        assert!(tmp.path().join("merged_31-03-2025.txt").exists());
        assert!(tmp.path().join("merged_01-04-2025.txt").exists());
    }

    #[test]
    fn test_run_range_stops_on_scan_failure() {
        let tmp = TempDir::new().unwrap();
        let config = MergeConfig {
            source_dir: tmp.path().join("absent"),
            ..config(&tmp)
        };

        let range = DateRange::new(ymd(2025, 3, 25), ymd(2025, 3, 27)).unwrap();
        let mut calls = 0;
        let err = run_range(&range, &config, |_| calls += 1).unwrap_err();

        assert!(matches!(err, MergeError::ScanDir { .. }));
        assert_eq!(calls, 0);
    }
}
