//! Narrowing the observations table to `{date, series}` rows.

use chrono::NaiveDate;
use polars::prelude::{DataFrame, StringChunked};

use fixings_model::{DATE_FORMAT, ObservationRow};

use crate::error::{IngestError, Result};
use crate::schema::FeedSchema;

/// Parses a feed date cell.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time component separated
/// by a space or `T`, which is discarded.
pub fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    let (day, rest) = (trimmed.get(..10)?, trimmed.get(10..)?);
    if rest.starts_with([' ', 'T']) {
        NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
    } else {
        None
    }
}

fn text_column<'a>(df: &'a DataFrame, index: usize, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .select_at_idx(index)
        .ok_or_else(|| IngestError::CsvParse {
            message: format!("column '{name}' missing from parsed table"),
        })?;
    Ok(column.as_materialized_series().str()?)
}

/// Extracts the date and selected series from each data row.
///
/// Rows with an empty date cell are skipped; a non-empty date that does not
/// parse is an error. Rate cells are passed through untouched.
pub fn extract_observations(df: &DataFrame, schema: &FeedSchema) -> Result<Vec<ObservationRow>> {
    let dates = text_column(df, schema.date_index, schema.date_column())?;
    let rates = text_column(df, schema.rate_index, schema.rate_column())?;

    let mut rows = Vec::with_capacity(df.height());
    for (row, (date, rate)) in dates.into_iter().zip(rates).enumerate() {
        let Some(date_text) = date.filter(|d| !d.trim().is_empty()) else {
            tracing::trace!(row, "skipping row without date");
            continue;
        };
        let date = parse_feed_date(date_text).ok_or_else(|| IngestError::InvalidDate {
            row,
            value: date_text.to_string(),
        })?;
        rows.push(ObservationRow::new(row, date, rate.map(str::to_string)));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 2);
        assert_eq!(parse_feed_date("2025-01-02"), expected);
        assert_eq!(parse_feed_date(" 2025-01-02 "), expected);
        assert_eq!(parse_feed_date("2025-01-02 00:00:00"), expected);
        assert_eq!(parse_feed_date("2025-01-02T00:00:00"), expected);
    }

    #[test]
    fn test_parse_feed_date_rejects_garbage() {
        assert_eq!(parse_feed_date("02/01/2025"), None);
        assert_eq!(parse_feed_date("2025-13-01"), None);
        assert_eq!(parse_feed_date("2025-01-02x"), None);
        assert_eq!(parse_feed_date(""), None);
    }
}
