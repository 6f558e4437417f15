//! Error types for raw feed ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and loading the data region of a feed.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Feed file not found.
    #[error("feed file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File is not UTF-8 (or ASCII-compatible) text.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Feed Structure Errors ===
    /// No `"OBSERVATIONS"` marker line separates metadata from data.
    #[error("could not find \"OBSERVATIONS\" marker line in feed")]
    MissingSentinel,

    /// The marker line is not followed by a header row.
    #[error("no header row after \"OBSERVATIONS\" marker on line {line}")]
    NoHeaderDetected { line: usize },

    /// Header row has no `date` column.
    #[error("no date column in header: {columns:?}")]
    MissingDateColumn { columns: Vec<String> },

    /// A non-empty date cell could not be parsed.
    #[error("invalid date '{value}' in data row {row}")]
    InvalidDate { row: usize, value: String },

    /// Failed to parse the tabular region.
    #[error("failed to parse observations table: {message}")]
    CsvParse { message: String },

    // === Column Selection Errors ===
    /// Requested series column not present in the header.
    #[error("column '{column}' not found in feed (available: {})", available.join(", "))]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },
}

impl IngestError {
    /// Returns true for errors caused by the shape of the feed rather than I/O.
    pub fn is_malformed_feed(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedEncoding { .. }
                | Self::MissingSentinel
                | Self::NoHeaderDetected { .. }
                | Self::MissingDateColumn { .. }
                | Self::InvalidDate { .. }
                | Self::CsvParse { .. }
        )
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/corra_raw.csv"),
        };
        assert_eq!(err.to_string(), "feed file not found: /path/to/corra_raw.csv");
    }

    #[test]
    fn test_unknown_column_lists_available() {
        let err = IngestError::UnknownColumn {
            column: "NOPE".to_string(),
            available: vec!["AVG.INTWO".to_string(), "OTHER".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "column 'NOPE' not found in feed (available: AVG.INTWO, OTHER)"
        );
        assert!(!err.is_malformed_feed());
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::NoData("empty".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::CsvParse { .. }));
        assert!(ingest_err.is_malformed_feed());
    }
}
