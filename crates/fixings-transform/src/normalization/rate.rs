//! Percent-to-fraction rescaling and row-level cleaning.

use fixings_model::{NormalizedRecord, ObservationRow};

use super::numeric::parse_rate;

/// Values with a magnitude above this are read as percentage points.
///
/// A true fraction of exactly 1.0 (100%) is therefore left as-is, and a
/// genuine fraction above 1.0 would be wrongly divided. Feeds quoting rates
/// that high are out of scope.
pub const PERCENT_THRESHOLD: f64 = 1.0;

/// Convert a parsed value to a decimal fraction.
///
/// `4.50` becomes `0.045`; `0.045` and `1.0` are returned unchanged.
pub fn to_decimal_fraction(value: f64) -> f64 {
    if value.abs() > PERCENT_THRESHOLD {
        value / 100.0
    } else {
        value
    }
}

/// Records that survived cleaning, plus how many rows were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRows {
    pub records: Vec<NormalizedRecord>,
    pub dropped: usize,
}

/// Coerce and rescale each observation, dropping rows without a usable value.
///
/// Input order is preserved.
pub fn normalize_observations(rows: &[ObservationRow]) -> NormalizedRows {
    let mut result = NormalizedRows {
        records: Vec::with_capacity(rows.len()),
        dropped: 0,
    };

    for row in rows {
        match row.rate_text().and_then(parse_rate) {
            Some(value) => result
                .records
                .push(NormalizedRecord::new(row.date, to_decimal_fraction(value))),
            None => {
                tracing::trace!(row = row.row, date = %row.date, "dropping row without rate");
                result.dropped += 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, rate: Option<&str>) -> ObservationRow {
        ObservationRow::new(
            day as usize,
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            rate.map(str::to_string),
        )
    }

    #[test]
    fn test_percentage_rescaled() {
        assert_eq!(to_decimal_fraction(4.5), 0.045);
        assert_eq!(to_decimal_fraction(-2.5), -0.025);
    }

    #[test]
    fn test_fraction_unchanged() {
        assert_eq!(to_decimal_fraction(0.045), 0.045);
        assert_eq!(to_decimal_fraction(0.0), 0.0);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(to_decimal_fraction(1.0), 1.0);
        assert_eq!(to_decimal_fraction(-1.0), -1.0);
        assert_eq!(to_decimal_fraction(1.01), 0.0101);
    }

    #[test]
    fn test_normalize_drops_unusable_rows() {
        let rows = vec![
            row(1, Some("4.50")),
            row(2, None),
            row(3, Some("  ")),
            row(4, Some("n/a")),
            row(5, Some("0.045")),
        ];
        let result = normalize_observations(&rows);
        assert_eq!(result.dropped, 3);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].rate, 0.045);
        assert_eq!(result.records[1].rate, 0.045);
        assert_eq!(result.records[1].date.to_string(), "2025-01-05");
    }
}
