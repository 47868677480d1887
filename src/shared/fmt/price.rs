//! Price formatting for human-readable display.
//!
//! Prices render with comma thousands separators and at most two fractional
//! digits (trailing zeros trimmed). A missing price renders as the shared
//! placeholder so an unavailable quote never reads as zero.

use super::PLACEHOLDER;

/// Format an optional price for display.
pub fn display(value: Option<f64>) -> String {
    match value {
        Some(v) => display_formatted_string(format!("{:.2}", v)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Trims trailing zeros, adds thousands separators.
fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.as_str()),
    };

    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_to_two_decimals() {
        assert_eq!(display(Some(65000.1234)), "65,000.12");
        assert_eq!(display(Some(1.239)), "1.24");
        assert_eq!(display(Some(0.5)), "0.5");
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(display(Some(9800000.0)), "9,800,000");
        assert_eq!(display(Some(1.5)), "1.5");
        assert_eq!(display(Some(100.0)), "100");
        assert_eq!(display(Some(0.0)), "0");
    }

    #[test]
    fn test_display_missing_value() {
        assert_eq!(display(None), PLACEHOLDER);
    }

    #[test]
    fn test_display_formatted_string_thousands_separator() {
        assert_eq!(display_formatted_string("1000".to_string()), "1,000");
        assert_eq!(display_formatted_string("12345".to_string()), "12,345");
        assert_eq!(display_formatted_string("123456".to_string()), "123,456");
        assert_eq!(display_formatted_string("1234567.89".to_string()), "1,234,567.89");
        assert_eq!(
            display_formatted_string("1234567890".to_string()),
            "1,234,567,890"
        );
    }

    #[test]
    fn test_display_formatted_string_small_integers_untouched() {
        assert_eq!(display_formatted_string("0".to_string()), "0");
        assert_eq!(display_formatted_string("1".to_string()), "1");
        assert_eq!(display_formatted_string("123".to_string()), "123");
    }

    #[test]
    fn test_display_formatted_string_negative() {
        assert_eq!(display_formatted_string("-1".to_string()), "-1");
        assert_eq!(display_formatted_string("-1000".to_string()), "-1,000");
        assert_eq!(display_formatted_string("-123456".to_string()), "-123,456");
        assert_eq!(
            display_formatted_string("-1234.56".to_string()),
            "-1,234.56"
        );
    }
}
