//! Locates the boundary between the metadata preamble and the data table.
//!
//! Rate feeds open with a free-form block of metadata whose length varies
//! between downloads. The table starts on the line after a marker row whose
//! trimmed, upper-cased text is exactly `"OBSERVATIONS"`, quotes included.

use crate::error::{IngestError, Result};

/// Marker line that precedes the header row, including its quote characters.
pub const SENTINEL: &str = "\"OBSERVATIONS\"";

/// Returns true if `line` is the data-region marker.
pub fn is_sentinel(line: &str) -> bool {
    line.trim().to_uppercase() == SENTINEL
}

/// Finds the zero-based index of the first marker line.
///
/// When several lines match, the earliest one wins.
pub fn find_sentinel<'a, I>(lines: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .position(is_sentinel)
        .ok_or(IngestError::MissingSentinel)
}

/// The tabular part of a feed, starting at the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRegion<'a> {
    /// Zero-based index of the marker line.
    pub sentinel_index: usize,
    /// The header row, without its line terminator.
    pub header: &'a str,
    /// Header row and every line after it.
    pub body: &'a str,
}

impl FeedRegion<'_> {
    /// 1-based line number of the header row in the original feed.
    pub fn header_line(&self) -> usize {
        self.sentinel_index + 2
    }

    /// Returns true if at least one non-blank line follows the header.
    pub fn has_data_rows(&self) -> bool {
        self.body
            .lines()
            .skip(1)
            .any(|line| !line.trim().is_empty())
    }
}

/// Splits feed content into its tabular region.
///
/// A leading UTF-8 BOM is ignored.
pub fn split_feed(content: &str) -> Result<FeedRegion<'_>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let marker = find_sentinel(lines.iter().copied())?;
    let offset: usize = lines.iter().take(marker + 1).copied().map(str::len).sum();

    let header = lines
        .get(marker + 1)
        .map(|raw| raw.trim_end_matches(['\r', '\n']))
        .filter(|header| !header.trim().is_empty())
        .ok_or(IngestError::NoHeaderDetected { line: marker + 1 })?;

    tracing::debug!(
        sentinel_line = marker + 1,
        header_line = marker + 2,
        "located observations table"
    );
    Ok(FeedRegion {
        sentinel_index: marker,
        header,
        body: &content[offset..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = "\"SERIES\"\n\
        \"AVG.INTWO\",\"Canadian Overnight Repo Rate Average\"\n\
        \n\
        \"OBSERVATIONS\"\n\
        \"date\",\"AVG.INTWO\"\n\
        \"2025-01-02\",\"3.31\"\n";

    #[test]
    fn test_is_sentinel_normalizes_case_and_whitespace() {
        assert!(is_sentinel("\"OBSERVATIONS\""));
        assert!(is_sentinel("  \"observations\"  \r\n"));
        assert!(!is_sentinel("OBSERVATIONS"));
        assert!(!is_sentinel("\"OBSERVATIONS\",\"\""));
    }

    #[test]
    fn test_find_sentinel_first_match_wins() {
        let lines = ["meta", "\"OBSERVATIONS\"", "date,A", "\"OBSERVATIONS\""];
        assert_eq!(find_sentinel(lines).unwrap(), 1);
    }

    #[test]
    fn test_find_sentinel_missing() {
        let lines = ["meta", "date,A", "2025-01-01,1.0"];
        assert!(matches!(
            find_sentinel(lines),
            Err(IngestError::MissingSentinel)
        ));
    }

    #[test]
    fn test_split_feed_region() {
        let region = split_feed(FEED).unwrap();
        assert_eq!(region.sentinel_index, 3);
        assert_eq!(region.header_line(), 5);
        assert_eq!(region.header, "\"date\",\"AVG.INTWO\"");
        assert!(region.body.starts_with("\"date\""));
        assert!(region.has_data_rows());
    }

    #[test]
    fn test_split_feed_with_bom_and_crlf() {
        let content = "\u{feff}\"OBSERVATIONS\"\r\ndate,A\r\n2025-01-01,1.0\r\n";
        let region = split_feed(content).unwrap();
        assert_eq!(region.sentinel_index, 0);
        assert_eq!(region.header, "date,A");
    }

    #[test]
    fn test_split_feed_without_header() {
        let result = split_feed("meta\n\"OBSERVATIONS\"\n");
        assert!(matches!(
            result,
            Err(IngestError::NoHeaderDetected { line: 2 })
        ));

        let result = split_feed("meta\n\"OBSERVATIONS\"\n\n2025-01-01,1.0\n");
        assert!(matches!(
            result,
            Err(IngestError::NoHeaderDetected { line: 2 })
        ));
    }

    #[test]
    fn test_split_feed_header_only() {
        let region = split_feed("\"OBSERVATIONS\"\ndate,A\n\n").unwrap();
        assert!(!region.has_data_rows());
    }

    #[test]
    fn test_split_feed_uses_first_marker() {
        let content = "meta\n\"OBSERVATIONS\"\ndate,A\n\"OBSERVATIONS\"\ndate,B\n";
        let region = split_feed(content).unwrap();
        assert_eq!(
            region.sentinel_index,
            find_sentinel(content.lines()).unwrap()
        );
        assert_eq!(region.header, "date,A");
        assert!(region.body.starts_with("date,A\n"));
    }

    #[test]
    fn test_split_feed_unquoted_marker_is_not_sentinel() {
        let result = split_feed("OBSERVATIONS\ndate,A\n2025-01-01,1.0\n");
        assert!(matches!(result, Err(IngestError::MissingSentinel)));
    }
}
