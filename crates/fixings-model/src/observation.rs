use chrono::NaiveDate;

/// A single data row narrowed to the date and the selected series.
///
/// `rate` holds the raw cell text; `None` means the cell was empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationRow {
    /// 0-based position among the data rows of the feed.
    pub row: usize,
    pub date: NaiveDate,
    pub rate: Option<String>,
}

impl ObservationRow {
    pub fn new(row: usize, date: NaiveDate, rate: Option<String>) -> Self {
        Self { row, date, rate }
    }

    pub fn rate_text(&self) -> Option<&str> {
        self.rate.as_deref()
    }
}
