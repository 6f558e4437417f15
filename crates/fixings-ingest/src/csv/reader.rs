//! Feed file reading and loading of the observations table.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};
use crate::scanner::FeedRegion;

/// Maximum feed size accepted for in-memory loading (64 MB).
///
/// Daily rate feeds are a few thousand rows; anything near this limit is
/// almost certainly the wrong file.
pub const MAX_FEED_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_FEED_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 encoded files by their byte order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped by the scanner)
    Ok(())
}

/// Reads the whole feed as UTF-8 text after size and encoding checks.
pub fn read_feed_text(path: &Path) -> Result<String> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let bytes = std::fs::read(path).map_err(|e| open_error(path, e))?;
    String::from_utf8(bytes).map_err(|_| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding: "non-UTF-8",
    })
}

/// Loads the observations table into a DataFrame.
///
/// Every column is read as text so that the date and rate cells reach the
/// normalizer exactly as published. Empty cells become nulls.
pub fn read_region_frame(region: &FeedRegion<'_>) -> Result<DataFrame> {
    let cursor = Cursor::new(region.body.as_bytes().to_vec());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(cursor)
        .finish()?;

    tracing::debug!(
        rows = df.height(),
        columns = df.width(),
        "loaded observations table"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::split_feed;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_feed(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_feed_text() {
        let file = create_temp_feed(b"meta\n\"OBSERVATIONS\"\ndate,A\n");
        let text = read_feed_text(file.path()).unwrap();
        assert!(text.contains("OBSERVATIONS"));
    }

    #[test]
    fn test_read_feed_text_missing_file() {
        let result = read_feed_text(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_rejects_utf16() {
        let file = create_temp_feed(&[0xFF, 0xFE, b'd', 0]);
        let result = read_feed_text(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let file = create_temp_feed(&[b'a', 0xC3, 0x28, b'\n']);
        let result = read_feed_text(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "non-UTF-8",
                ..
            })
        ));
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_feed(b"0123456789");
        assert!(check_file_size_with_limit(file.path(), 100).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 5),
            Err(IngestError::FileTooLarge { size: 10, .. })
        ));
    }

    #[test]
    fn test_read_region_frame_reads_text_columns() {
        let content = "\"OBSERVATIONS\"\n\"date\",\"A\",\"B\"\n\"2025-01-01\",\"4.50\",\n\"2025-01-02\",,\"4.55\"\n";
        let region = split_feed(content).unwrap();
        let df = read_region_frame(&region).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);

        let a = df.select_at_idx(1).unwrap().as_materialized_series().str().unwrap();
        assert_eq!(a.get(0), Some("4.50"));
        assert_eq!(a.get(1), None);
    }
}
