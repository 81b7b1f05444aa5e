use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::{MergeError, Result};
use crate::naming::OUTPUT_DATE_FORMAT;

// ── CLI date parsing ──────────────────────────────────────────────────────────

/// Parse a `DD-MM-YYYY` date as written in configuration.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), OUTPUT_DATE_FORMAT)
        .map_err(|_| MergeError::InvalidDate(s.to_string()))
}

/// `clap` value parser wrapper around [`parse_date`].
pub fn parse_cli_date(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

// ── DateRange ─────────────────────────────────────────────────────────────────

/// Inclusive range of calendar days, walked one day at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting one whose end precedes its start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(MergeError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Every day from `start` to `end`, both included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.checked_add_days(Days::new(1)))
            .take_while(move |d| *d <= end)
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Always `false`: a constructed range holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── parse_date ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_date_day_first() {
        assert_eq!(parse_date("25-03-2025").unwrap(), ymd(2025, 3, 25));
        assert_eq!(parse_date("04-04-2025").unwrap(), ymd(2025, 4, 4));
    }

    #[test]
    fn test_parse_date_rejects_iso_form() {
        let err = parse_date("2025-03-25").unwrap_err();
        assert!(matches!(err, MergeError::InvalidDate(ref s) if s == "2025-03-25"));
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        assert!(parse_date("30-02-2025").is_err());
    }

    #[test]
    fn test_parse_cli_date_reports_message() {
        let msg = parse_cli_date("tomorrow").unwrap_err();
        assert!(msg.contains("DD-MM-YYYY"));
    }

    // ── DateRange ─────────────────────────────────────────────────────────────

    #[test]
    fn test_range_crosses_month_boundary() {
        let range = DateRange::new(ymd(2025, 3, 25), ymd(2025, 4, 4)).unwrap();
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(days.len(), 11);
        assert_eq!(range.len(), 11);
        assert_eq!(days.first(), Some(&ymd(2025, 3, 25)));
        assert_eq!(days[6], ymd(2025, 3, 31));
        assert_eq!(days[7], ymd(2025, 4, 1));
        assert_eq!(days.last(), Some(&ymd(2025, 4, 4)));
    }

    #[test]
    fn test_range_single_day() {
        let range = DateRange::new(ymd(2025, 3, 25), ymd(2025, 3, 25)).unwrap();
        assert_eq!(range.days().collect::<Vec<_>>(), vec![ymd(2025, 3, 25)]);
        assert_eq!(range.len(), 1);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_range_includes_leap_day() {
        let range = DateRange::new(ymd(2024, 2, 28), ymd(2024, 3, 1)).unwrap();
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(days, vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = DateRange::new(ymd(2025, 4, 4), ymd(2025, 3, 25)).unwrap_err();
        assert!(matches!(err, MergeError::InvalidDateRange { .. }));
    }
}
