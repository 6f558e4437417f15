//! Rate fixings transformation.
//!
//! Turns raw `{date, text}` observations into a clean, sorted series of
//! decimal-fraction rates:
//!
//! - **Normalization**: numeric coercion and percent-to-fraction rescaling;
//!   rows without a usable value are dropped, never raised as errors
//! - **Filtering**: optional inclusive date bounds
//! - **Ordering**: stable ascending sort by date

mod filter;

pub mod normalization;

pub use filter::{apply_bounds, sort_by_date};
pub use normalization::{
    NormalizedRows, PERCENT_THRESHOLD, normalize_observations, parse_rate, to_decimal_fraction,
};
