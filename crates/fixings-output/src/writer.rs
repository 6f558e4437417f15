//! CSV serialization of a normalized series.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use fixings_model::{DATE_FORMAT, NormalizedSeries, OutputHeader, WriteMode};

use crate::error::{OutputError, Result};

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a rate with the shortest decimal that round-trips.
///
/// Integral values keep a trailing `.0` so the column always reads as decimal.
pub fn format_rate(rate: f64) -> String {
    let text = rate.to_string();
    if text.contains(['.', 'e', 'E']) || !rate.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Write `series` as CSV to any writer.
pub fn write_series_to<W: Write>(
    writer: W,
    series: &NormalizedSeries,
    header: &OutputHeader,
) -> std::result::Result<W, csv::Error> {
    let mut csv = csv_writer(writer);
    csv.write_record([header.date.as_str(), header.rate.as_str()])?;
    for record in &series.records {
        csv.write_record([format_date(record.date), format_rate(record.rate)])?;
    }
    csv.flush()?;
    csv.into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Render `series` to an in-memory CSV string.
pub fn render_series(series: &NormalizedSeries, header: &OutputHeader) -> String {
    let bytes = write_series_to(Vec::new(), series, header).unwrap_or_default();
    String::from_utf8(bytes).unwrap_or_default()
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write `series` to `path`, creating missing parent directories.
///
/// In [`WriteMode::Atomic`] the series is written to a temp file in the
/// target directory, synced, and renamed over `path`; readers see either the
/// old file or the complete new one.
pub fn write_series(
    path: &Path,
    series: &NormalizedSeries,
    header: &OutputHeader,
    mode: WriteMode,
) -> Result<PathBuf> {
    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(|e| OutputError::Io {
        operation: "create directory",
        path: dir.to_path_buf(),
        source: e,
    })?;

    match mode {
        WriteMode::Atomic => write_atomic(path, dir, series, header)?,
        WriteMode::Direct => write_direct(path, series, header)?,
    }

    tracing::info!(
        path = %path.display(),
        records = series.len(),
        "wrote normalized fixings"
    );
    Ok(path.to_path_buf())
}

fn write_atomic(
    path: &Path,
    dir: &Path,
    series: &NormalizedSeries,
    header: &OutputHeader,
) -> Result<()> {
    let mut temp = tempfile::Builder::new()
        .prefix(".fixings-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| OutputError::Io {
            operation: "create temp file in",
            path: dir.to_path_buf(),
            source: e,
        })?;

    let temp_path = temp.path().to_path_buf();
    write_series_to(BufWriter::new(temp.as_file_mut()), series, header).map_err(|e| {
        OutputError::Csv {
            path: temp_path.clone(),
            source: e,
        }
    })?;

    temp.as_file().sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    temp.persist(path)
        .map_err(|e| OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source: e.error,
        })?;
    Ok(())
}

fn write_direct(path: &Path, series: &NormalizedSeries, header: &OutputHeader) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;
    write_series_to(BufWriter::new(file), series, header).map_err(|e| OutputError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
