//! Raw rate feed ingestion.
//!
//! Central bank rate downloads wrap the observations table in a metadata
//! preamble of varying length. This crate finds the table, validates that the
//! requested series exists, and loads `{date, series}` rows for normalization.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fixings_ingest::load_observations;
//!
//! let feed = load_observations(Path::new("data/corra_raw.csv"), "AVG.INTWO")?;
//! println!("{} rows for {}", feed.rows.len(), feed.schema.rate_column());
//! ```

mod csv;
mod error;
mod observations;
mod scanner;
mod schema;

use std::path::Path;

use fixings_model::ObservationRow;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    FeedHeaders, MAX_FEED_FILE_SIZE, check_file_size, check_file_size_with_limit,
    normalize_header, parse_csv_line, read_feed_text, read_region_frame, validate_encoding,
};

// === Feed Structure ===
pub use observations::{extract_observations, parse_feed_date};
pub use scanner::{FeedRegion, SENTINEL, find_sentinel, is_sentinel, split_feed};
pub use schema::{DATE_COLUMN, FeedSchema, series_columns};

/// Observations for one series, with the schema they were validated against.
#[derive(Debug, Clone)]
pub struct FeedObservations {
    pub schema: FeedSchema,
    pub rows: Vec<ObservationRow>,
}

/// Locates the table in `content` and loads rows for `rate_column`.
///
/// The schema is validated before the table body is parsed.
pub fn parse_observations(content: &str, rate_column: &str) -> Result<FeedObservations> {
    let region = split_feed(content)?;
    let headers = FeedHeaders::parse(region.header);
    let schema = FeedSchema::validate(&headers, rate_column)?;

    if !region.has_data_rows() {
        tracing::warn!(series = rate_column, "feed has a header but no data rows");
        return Ok(FeedObservations {
            schema,
            rows: Vec::new(),
        });
    }

    let df = read_region_frame(&region)?;
    let rows = extract_observations(&df, &schema)?;
    Ok(FeedObservations { schema, rows })
}

/// Reads a feed file and loads rows for `rate_column`.
pub fn load_observations(path: &Path, rate_column: &str) -> Result<FeedObservations> {
    let content = read_feed_text(path)?;
    parse_observations(&content, rate_column)
}

/// Lists the series columns published in a feed file.
pub fn list_series(path: &Path) -> Result<Vec<String>> {
    let content = read_feed_text(path)?;
    let region = split_feed(&content)?;
    Ok(series_columns(&FeedHeaders::parse(region.header)))
}
