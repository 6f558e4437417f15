//! Header row parsing and normalization.

/// Column names parsed from the header row of the observations table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedHeaders {
    /// Normalized column names (trimmed), in file order.
    pub columns: Vec<String>,
}

impl FeedHeaders {
    /// Parses a raw header line.
    pub fn parse(line: &str) -> Self {
        Self {
            columns: parse_csv_line(line),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    /// Position of the first column matching `name` exactly.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of the first column matching `name` ignoring ASCII case.
    pub fn position_ignore_case(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }
}

/// Normalizes a header value by trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}

/// Parses a CSV line into fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_headers_positions() {
        let headers = FeedHeaders::parse("\"date\",\"AVG.INTWO\",\"AVG.INTWO.LOW\"");
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.position("AVG.INTWO"), Some(1));
        assert_eq!(headers.position("avg.intwo"), None);
        assert_eq!(headers.position_ignore_case("DATE"), Some(0));
    }

    #[test]
    fn test_feed_headers_empty() {
        assert!(FeedHeaders::parse("").is_empty());
        assert!(FeedHeaders::parse(" , ").is_empty());
        assert!(!FeedHeaders::parse("date").is_empty());
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Date  "), "Date");
        assert_eq!(normalize_header("Date"), "Date");
    }

    #[test]
    fn test_parse_csv_line_simple() {
        let result = parse_csv_line("Date,AVG.INTWO,OTHER");
        assert_eq!(result, vec!["Date", "AVG.INTWO", "OTHER"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"date\",\"rate, weighted\"");
        assert_eq!(result, vec!["date", "rate, weighted"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"the \"\"fix\"\"\",b");
        assert_eq!(result, vec!["the \"fix\"", "b"]);
    }

    #[test]
    fn test_parse_csv_line_trailing_carriage_return() {
        let result = parse_csv_line("date , A \r");
        assert_eq!(result, vec!["date", "A"]);
    }
}
