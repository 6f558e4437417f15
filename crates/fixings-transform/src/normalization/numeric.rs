//! Numeric coercion of rate cells.
//!
//! Rate feeds publish plain decimal numerals. Anything else (blank cells,
//! `n/a` markers, non-finite values) is treated as "no observation".

/// Parse a rate cell to `f64`.
///
/// Handles:
/// - Decimal numbers: "4.50", "-0.25", ".5"
/// - Surrounding whitespace: "  4.50  "
/// - Scientific notation: "4.5e-2"
///
/// Returns None for empty cells, non-numeric text, and NaN or infinite
/// values.
pub fn parse_rate(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}
