//! Integration tests for loading normalized fixings.

use std::fs;

use chrono::NaiveDate;
use fixings_market::{
    BusinessDayConvention, HolidayCalendar, MarketConfig, MarketError, load_fixings,
    load_holidays,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn loads_fixings_with_adjusted_dates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("temp_fixings.csv");
    fs::write(&path, "Date,Rate\n2025-01-02,0.045\n2025-01-03,0.046\n2025-01-04,0.047\n").unwrap();

    let config = MarketConfig::new(HolidayCalendar::weekends_only("Canada"));
    let fixings = load_fixings(&path, &config).expect("load fixings");

    assert_eq!(fixings.len(), 3);
    assert_eq!(fixings[0].date, ymd(2025, 1, 2));
    assert_eq!(fixings[0].adjusted_date, ymd(2025, 1, 2));
    assert!((fixings[0].rate - 0.045).abs() < 1e-12);
    assert_eq!(fixings[0].interest_rate.rate, fixings[0].rate);
    // Saturday rolls to Monday.
    assert_eq!(fixings[2].adjusted_date, ymd(2025, 1, 6));
}

#[test]
fn holidays_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let holidays = dir.path().join("holidays.txt");
    fs::write(&holidays, "# Canada 2025\n2025-01-01 # New Year's Day\n\n").unwrap();
    let path = dir.path().join("fixings.csv");
    fs::write(&path, "Date,Rate\n2025-01-01,0.0325\n").unwrap();

    let calendar = HolidayCalendar::new("Canada", load_holidays(&holidays).unwrap());
    let config = MarketConfig::new(calendar).with_convention(BusinessDayConvention::Following);
    let fixings = load_fixings(&path, &config).unwrap();

    assert_eq!(fixings[0].adjusted_date, ymd(2025, 1, 2));
}

#[test]
fn missing_rate_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixings.csv");
    fs::write(&path, "Date,Value\n2025-01-02,0.045\n").unwrap();

    let result = load_fixings(&path, &MarketConfig::default());
    assert!(matches!(
        result,
        Err(MarketError::MissingColumn { ref column, .. }) if column == "Rate"
    ));
}

#[test]
fn invalid_rate_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixings.csv");
    fs::write(&path, "Date,Rate\n2025-01-02,abc\n").unwrap();

    let result = load_fixings(&path, &MarketConfig::default());
    assert!(matches!(result, Err(MarketError::InvalidRate { .. })));
}
