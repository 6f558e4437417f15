//! Configuration options for a normalization run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range; either end may be left open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Bounds that accept every date.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns true if `date` lies within the bounds (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Column labels written on the first line of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputHeader {
    pub date: String,
    pub rate: String,
}

impl Default for OutputHeader {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            rate: "Rate".to_string(),
        }
    }
}

impl OutputHeader {
    pub fn new(date: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            rate: rate.into(),
        }
    }
}

/// How the output file replaces any existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WriteMode {
    /// Write a sibling temp file and rename it over the target.
    #[default]
    Atomic,
    /// Truncate and write the target in place.
    Direct,
}

/// Options controlling a single normalization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Name of the series column to extract (matched exactly).
    pub rate_column: String,
    #[serde(default)]
    pub bounds: DateBounds,
    #[serde(default)]
    pub header: OutputHeader,
    #[serde(default)]
    pub write_mode: WriteMode,
}

impl NormalizeOptions {
    pub fn new(rate_column: impl Into<String>) -> Self {
        Self {
            rate_column: rate_column.into(),
            bounds: DateBounds::default(),
            header: OutputHeader::default(),
            write_mode: WriteMode::default(),
        }
    }

    #[must_use]
    pub fn with_start(mut self, start: Option<NaiveDate>) -> Self {
        self.bounds.start = start;
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: Option<NaiveDate>) -> Self {
        self.bounds.end = end;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: OutputHeader) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = DateBounds::new(Some(date(2)), Some(date(3)));
        assert!(!bounds.contains(date(1)));
        assert!(bounds.contains(date(2)));
        assert!(bounds.contains(date(3)));
        assert!(!bounds.contains(date(4)));
    }

    #[test]
    fn test_bounds_open_ends() {
        let from = DateBounds::new(Some(date(2)), None);
        assert!(!from.contains(date(1)));
        assert!(from.contains(date(31)));

        let until = DateBounds::new(None, Some(date(2)));
        assert!(until.contains(date(1)));
        assert!(!until.contains(date(3)));

        assert!(DateBounds::unbounded().contains(date(15)));
        assert!(DateBounds::unbounded().is_unbounded());
    }

    #[test]
    fn test_default_header() {
        let header = OutputHeader::default();
        assert_eq!(header.date, "Date");
        assert_eq!(header.rate, "Rate");
    }

    #[test]
    fn test_options_builder() {
        let options = NormalizeOptions::new("AVG.INTWO")
            .with_start(Some(date(2)))
            .with_end(Some(date(3)))
            .with_write_mode(WriteMode::Direct);
        assert_eq!(options.rate_column, "AVG.INTWO");
        assert_eq!(options.bounds, DateBounds::new(Some(date(2)), Some(date(3))));
        assert_eq!(options.write_mode, WriteMode::Direct);
        assert_eq!(options.header, OutputHeader::default());
    }
}
