//! Explicit schema check for the observations table.
//!
//! The header must carry a date column and the requested series column. Both
//! are resolved to positions here, before any data row is touched, so that a
//! misspelled series name fails fast.

use crate::csv::FeedHeaders;
use crate::error::{IngestError, Result};

/// Name of the date column, matched ignoring ASCII case.
pub const DATE_COLUMN: &str = "date";

/// Validated layout of an observations table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSchema {
    /// All header names, in file order.
    pub columns: Vec<String>,
    /// Position of the date column.
    pub date_index: usize,
    /// Position of the selected series column.
    pub rate_index: usize,
}

impl FeedSchema {
    /// Resolves the date column and `rate_column` against the header.
    pub fn validate(headers: &FeedHeaders, rate_column: &str) -> Result<Self> {
        let date_index = headers.position_ignore_case(DATE_COLUMN).ok_or_else(|| {
            IngestError::MissingDateColumn {
                columns: headers.columns.clone(),
            }
        })?;

        let rate_index = headers
            .position(rate_column)
            .ok_or_else(|| IngestError::UnknownColumn {
                column: rate_column.to_string(),
                available: series_columns(headers),
            })?;

        Ok(Self {
            columns: headers.columns.clone(),
            date_index,
            rate_index,
        })
    }

    pub fn date_column(&self) -> &str {
        &self.columns[self.date_index]
    }

    pub fn rate_column(&self) -> &str {
        &self.columns[self.rate_index]
    }
}

/// Header names other than the date column.
pub fn series_columns(headers: &FeedHeaders) -> Vec<String> {
    headers
        .columns
        .iter()
        .filter(|name| !name.eq_ignore_ascii_case(DATE_COLUMN) && !name.is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(line: &str) -> FeedHeaders {
        FeedHeaders::parse(line)
    }

    #[test]
    fn test_validate_resolves_positions() {
        let schema = FeedSchema::validate(&headers("Date,AVG.INTWO,OTHER"), "OTHER").unwrap();
        assert_eq!(schema.date_index, 0);
        assert_eq!(schema.rate_index, 2);
        assert_eq!(schema.date_column(), "Date");
        assert_eq!(schema.rate_column(), "OTHER");
    }

    #[test]
    fn test_date_column_case_insensitive() {
        let schema = FeedSchema::validate(&headers("AVG.INTWO,DATE"), "AVG.INTWO").unwrap();
        assert_eq!(schema.date_index, 1);
        assert_eq!(schema.rate_index, 0);
    }

    #[test]
    fn test_rate_column_is_case_sensitive() {
        let result = FeedSchema::validate(&headers("date,AVG.INTWO"), "avg.intwo");
        match result {
            Err(IngestError::UnknownColumn { column, available }) => {
                assert_eq!(column, "avg.intwo");
                assert_eq!(available, vec!["AVG.INTWO"]);
            }
            other => panic!("expected UnknownColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_date_column() {
        let result = FeedSchema::validate(&headers("when,AVG.INTWO"), "AVG.INTWO");
        assert!(matches!(result, Err(IngestError::MissingDateColumn { .. })));
    }

    #[test]
    fn test_series_columns_skip_date_and_blank() {
        assert_eq!(
            series_columns(&headers("date,A,,B")),
            vec!["A".to_string(), "B".to_string()]
        );
    }
}
