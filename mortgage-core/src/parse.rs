//! Normalization of raw form text into calculation inputs.

/// Trims whitespace and removes commas used as thousands separators.
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a form field into a number.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Returns `None` for
/// empty or whitespace-only input and for anything that is not a finite
/// number, including `inf` and `NaN` literals.
///
/// ```
/// use mortgage_core::parse::parse_amount;
///
/// assert_eq!(parse_amount("250,000"), Some(250000.0));
/// assert_eq!(parse_amount(""), None);
/// ```
pub fn parse_amount(s: &str) -> Option<f64> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            tracing::debug!(input = %s, %value, "non-finite amount treated as missing");
            None
        }
        Err(e) => {
            tracing::debug!(input = %s, "invalid amount: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56"), Some(1234.56));
        assert_eq!(parse_amount("1,234,567.89"), Some(1234567.89));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  "), Some(123.45));
    }

    #[test]
    fn parse_amount_empty_is_missing() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn parse_amount_rejects_non_numeric_text() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12 years"), None);
    }

    #[test]
    fn parse_amount_rejects_non_finite_literals() {
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn parse_amount_accepts_scientific_and_negative_values() {
        assert_eq!(parse_amount("2e5"), Some(200000.0));
        assert_eq!(parse_amount("-4.5"), Some(-4.5));
    }
}
