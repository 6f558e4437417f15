//! Normalized fixings records and series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cleaned observation: a calendar date and a decimal fraction rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub date: NaiveDate,
    pub rate: f64,
}

impl NormalizedRecord {
    pub fn new(date: NaiveDate, rate: f64) -> Self {
        Self { date, rate }
    }
}

/// The normalized output of one pipeline run for a single series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    /// Source column the records were taken from.
    pub name: String,
    pub records: Vec<NormalizedRecord>,
}

impl NormalizedSeries {
    pub fn new(name: impl Into<String>, records: Vec<NormalizedRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date in the series, assuming it has been sorted.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|record| record.date)
    }

    /// Latest date in the series, assuming it has been sorted.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|record| record.date)
    }

    /// Returns true if dates never decrease from one record to the next.
    pub fn is_sorted(&self) -> bool {
        self.records.windows(2).all(|pair| pair[0].date <= pair[1].date)
    }
}
