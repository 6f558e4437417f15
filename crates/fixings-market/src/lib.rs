//! Market adapter for normalized fixings.
//!
//! Maps `YYYY-MM-DD` strings to business-day-adjusted dates and decimal rates
//! to [`InterestRate`] values, using an explicit [`MarketConfig`] rather than
//! global defaults.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fixings_market::{HolidayCalendar, MarketConfig, load_fixings};
//!
//! let config = MarketConfig::new(HolidayCalendar::weekends_only("Canada"));
//! let fixings = load_fixings(Path::new("data/corra_fixings.csv"), &config)?;
//! ```

mod calendar;
mod config;
mod error;
mod loader;
mod rate;

pub use calendar::{BusinessCalendar, BusinessDayConvention, HolidayCalendar};
pub use config::MarketConfig;
pub use error::{MarketError, Result};
pub use loader::{Fixing, load_fixings, load_holidays, parse_adjusted_date, to_interest_rate};
pub use rate::{Compounding, DayCount, Frequency, InterestRate, RateConventions};
