//! Loading normalized `Date,Rate` files into adjusted fixings.

use std::path::Path;

use chrono::NaiveDate;

use fixings_model::DATE_FORMAT;

use crate::calendar::BusinessCalendar;
use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::rate::InterestRate;

/// One fixing ready for a term-structure library.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixing {
    /// Date as published.
    pub date: NaiveDate,
    /// Date after business-day adjustment.
    pub adjusted_date: NaiveDate,
    /// Decimal fraction rate.
    pub rate: f64,
    pub interest_rate: InterestRate,
}

/// Parse a `YYYY-MM-DD` string and adjust it onto a business day.
pub fn parse_adjusted_date(value: &str, config: &MarketConfig) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        MarketError::InvalidDate {
            value: value.to_string(),
        }
    })?;
    Ok(config.convention.adjust(&config.calendar, date))
}

/// Wrap a decimal rate with the configured conventions.
pub fn to_interest_rate(rate: f64, config: &MarketConfig) -> InterestRate {
    InterestRate::new(rate, config.rates)
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn get_string(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

/// Read a normalized fixings file (`Date,Rate` columns) and attach adjusted
/// dates and interest-rate objects.
pub fn load_fixings(path: &Path, config: &MarketConfig) -> Result<Vec<Fixing>> {
    let bytes = std::fs::read(path).map_err(|e| MarketError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| MarketError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let missing = |column: &str| MarketError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    };
    let idx_date = header_index(&headers, "Date").ok_or_else(|| missing("Date"))?;
    let idx_rate = header_index(&headers, "Rate").ok_or_else(|| missing("Rate"))?;

    let mut fixings = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| MarketError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        let date_text = get_string(&row, idx_date).unwrap_or_default();
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
            MarketError::InvalidDate {
                value: date_text.to_string(),
            }
        })?;

        let rate_text = get_string(&row, idx_rate).unwrap_or_default();
        let rate: f64 = rate_text.parse().map_err(|_| MarketError::InvalidRate {
            date: date_text.to_string(),
            value: rate_text.to_string(),
        })?;

        fixings.push(Fixing {
            date,
            adjusted_date: config.convention.adjust(&config.calendar, date),
            rate,
            interest_rate: to_interest_rate(rate, config),
        });
    }

    tracing::debug!(
        path = %path.display(),
        fixings = fixings.len(),
        calendar = config.calendar.name(),
        "loaded fixings"
    );
    Ok(fixings)
}

/// Read a holiday list: one `YYYY-MM-DD` per line, `#` starts a comment.
pub fn load_holidays(path: &Path) -> Result<Vec<NaiveDate>> {
    let text = std::fs::read_to_string(path).map_err(|e| MarketError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            NaiveDate::parse_from_str(line, DATE_FORMAT).map_err(|_| MarketError::InvalidDate {
                value: line.to_string(),
            })
        })
        .collect()
}
