//! Shared data model for overnight rate fixings.
//!
//! The types here flow between the ingest, transform, output and core crates:
//! a raw feed is narrowed to [`ObservationRow`]s, cleaned into
//! [`NormalizedRecord`]s, and collected into a [`NormalizedSeries`] that is
//! serialized as a two-column `Date,Rate` table.

pub mod observation;
pub mod options;
pub mod report;
pub mod series;

pub use observation::ObservationRow;
pub use options::{DateBounds, NormalizeOptions, OutputHeader, WriteMode};
pub use report::{NormalizeReport, NormalizeStats};
pub use series::{NormalizedRecord, NormalizedSeries};

/// Date format used for every date read from or written to a fixings file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
