//! Output writers for normalized fixings.
//!
//! Series are written as a two-column CSV (`Date,Rate` by default) with
//! fixed-width `YYYY-MM-DD` dates and shortest round-trip rate values, so the
//! same series always produces the same bytes.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{format_date, format_rate, render_series, write_series, write_series_to};
