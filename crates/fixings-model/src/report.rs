//! Run statistics and the report returned by a successful normalization.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row counts collected while a feed moves through the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeStats {
    /// Data rows read from the tabular region.
    pub rows_read: usize,
    /// Rows dropped because the selected series had no parseable value.
    pub dropped_missing: usize,
    /// Rows excluded by the date bounds.
    pub dropped_out_of_range: usize,
    /// Rows in the final series.
    pub rows_written: usize,
}

/// Outcome of a completed `normalize` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub output_path: PathBuf,
    pub series: String,
    pub stats: NormalizeStats,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}
