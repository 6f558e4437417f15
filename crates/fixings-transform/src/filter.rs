//! Date-range filtering and ordering.

use fixings_model::{DateBounds, NormalizedRecord};

/// Keep records inside `bounds`; returns the kept records and the number excluded.
pub fn apply_bounds(
    records: Vec<NormalizedRecord>,
    bounds: &DateBounds,
) -> (Vec<NormalizedRecord>, usize) {
    if bounds.is_unbounded() {
        return (records, 0);
    }
    let before = records.len();
    let kept: Vec<NormalizedRecord> = records
        .into_iter()
        .filter(|record| bounds.contains(record.date))
        .collect();
    let excluded = before - kept.len();
    (kept, excluded)
}

/// Sort ascending by date.
///
/// The sort is stable: records sharing a date keep their input order.
pub fn sort_by_date(records: &mut [NormalizedRecord]) {
    records.sort_by_key(|record| record.date);
}
