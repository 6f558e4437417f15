//! Value normalization for raw rate cells.

mod numeric;
mod rate;

pub use numeric::parse_rate;
pub use rate::{NormalizedRows, PERCENT_THRESHOLD, normalize_observations, to_decimal_fraction};
