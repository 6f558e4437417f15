//! CLI library components for the fixings normalizer.

pub mod logging;
