//! Normalization pipeline for raw overnight rate feeds.
//!
//! Runs the four stages in order: locate the observations table, validate
//! and select the requested series, clean and rescale values, then filter,
//! sort and write a `Date,Rate` file.

pub mod error;
pub mod pipeline;

pub use error::{ErrorKind, NormalizeError, Result};
pub use pipeline::{build_series, normalize, normalize_series};

pub use fixings_model::{
    DateBounds, NormalizeOptions, NormalizeReport, NormalizeStats, NormalizedRecord,
    NormalizedSeries, OutputHeader, WriteMode,
};
