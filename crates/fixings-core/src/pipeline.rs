//! Feed normalization pipeline.

use std::path::Path;

use tracing::{debug, info, info_span};

use fixings_ingest::{parse_observations, read_feed_text};
use fixings_model::{
    DateBounds, NormalizeOptions, NormalizeReport, NormalizeStats, NormalizedSeries,
    ObservationRow,
};
use fixings_output::write_series;
use fixings_transform::{apply_bounds, normalize_observations, sort_by_date};

use crate::error::Result;

/// Clean, filter and sort observations into a series.
pub fn build_series(
    name: &str,
    rows: &[ObservationRow],
    bounds: &DateBounds,
) -> (NormalizedSeries, NormalizeStats) {
    let cleaned = normalize_observations(rows);
    let (mut records, dropped_out_of_range) = apply_bounds(cleaned.records, bounds);
    sort_by_date(&mut records);

    let stats = NormalizeStats {
        rows_read: rows.len(),
        dropped_missing: cleaned.dropped,
        dropped_out_of_range,
        rows_written: records.len(),
    };
    (NormalizedSeries::new(name, records), stats)
}

/// Normalize feed content held in memory.
pub fn normalize_series(
    content: &str,
    options: &NormalizeOptions,
) -> Result<(NormalizedSeries, NormalizeStats)> {
    let feed = parse_observations(content, &options.rate_column)?;
    debug!(
        rows = feed.rows.len(),
        date_column = feed.schema.date_column(),
        "selected series"
    );

    let (series, stats) = build_series(&options.rate_column, &feed.rows, &options.bounds);
    debug!(
        dropped_missing = stats.dropped_missing,
        dropped_out_of_range = stats.dropped_out_of_range,
        kept = stats.rows_written,
        "normalized series"
    );
    Ok((series, stats))
}

/// Normalize the feed at `input` and write a `Date,Rate` file to `output`.
///
/// Structural errors abort before `output` is touched. Rows without a usable
/// value for the series are dropped silently.
pub fn normalize(
    input: &Path,
    output: &Path,
    options: &NormalizeOptions,
) -> Result<NormalizeReport> {
    let span = info_span!(
        "normalize",
        input = %input.display(),
        series = %options.rate_column
    );
    let _guard = span.enter();

    let content = read_feed_text(input)?;
    let (series, stats) = normalize_series(&content, options)?;
    let output_path = write_series(output, &series, &options.header, options.write_mode)?;

    info!(
        output = %output_path.display(),
        rows = stats.rows_written,
        "normalized fixings written"
    );

    Ok(NormalizeReport {
        output_path,
        series: series.name.clone(),
        stats,
        first_date: series.first_date(),
        last_date: series.last_date(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fixings_model::NormalizedRecord;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn row(day: u32, rate: Option<&str>) -> ObservationRow {
        ObservationRow::new(day as usize, date(day), rate.map(str::to_string))
    }

    #[test]
    fn test_build_series_counts() {
        let rows = vec![
            row(4, Some("4.70")),
            row(1, Some("4.50")),
            row(3, None),
            row(2, Some("4.60")),
        ];
        let bounds = DateBounds::new(None, Some(date(2)));
        let (series, stats) = build_series("AVG.INTWO", &rows, &bounds);

        assert_eq!(
            series.records,
            vec![
                NormalizedRecord::new(date(1), 0.045),
                NormalizedRecord::new(date(2), 4.60 / 100.0),
            ]
        );
        assert_eq!(
            stats,
            NormalizeStats {
                rows_read: 4,
                dropped_missing: 1,
                dropped_out_of_range: 1,
                rows_written: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_dates_pass_through_in_file_order() {
        let rows = vec![
            row(2, Some("4.60")),
            ObservationRow::new(9, date(1), Some("4.51".to_string())),
            row(1, Some("4.50")),
        ];
        let (series, _) = build_series("AVG.INTWO", &rows, &DateBounds::unbounded());
        let rates: Vec<f64> = series.records.iter().map(|r| r.rate).collect();
        assert_eq!(rates, vec![4.51 / 100.0, 0.045, 4.60 / 100.0]);
    }
}
