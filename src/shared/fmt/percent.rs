//! Percentage-change formatting — signed text plus a trend classification.

use super::PLACEHOLDER;

/// Direction tag the shell maps to gain/loss/neutral styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

/// A percentage change rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentDisplay {
    pub text: String,
    pub trend: Trend,
}

/// Format an optional percentage change with exactly two decimals.
///
/// Zero counts as a gain and carries an explicit `+`. A missing value gets
/// the neutral placeholder rather than reading as `+0.00%`.
pub fn display(value: Option<f64>) -> PercentDisplay {
    match value {
        Some(v) => {
            // Fold -0.0 into +0.0 so the sign stays stable at zero.
            let v = if v == 0.0 { 0.0 } else { v };
            PercentDisplay {
                text: format!("{:+.2}%", v),
                trend: if v >= 0.0 {
                    Trend::Positive
                } else {
                    Trend::Negative
                },
            }
        }
        None => PercentDisplay {
            text: PLACEHOLDER.to_string(),
            trend: Trend::Neutral,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_positive_change() {
        let p = display(Some(1.5));
        assert_eq!(p.text, "+1.50%");
        assert_eq!(p.trend, Trend::Positive);
    }

    #[test]
    fn test_display_negative_change() {
        let p = display(Some(-3.2));
        assert_eq!(p.text, "-3.20%");
        assert_eq!(p.trend, Trend::Negative);

        let p = display(Some(-0.01));
        assert_eq!(p.text, "-0.01%");
        assert_eq!(p.trend, Trend::Negative);
    }

    #[test]
    fn test_display_zero_is_a_gain() {
        let p = display(Some(0.0));
        assert_eq!(p.text, "+0.00%");
        assert_eq!(p.trend, Trend::Positive);

        let p = display(Some(-0.0));
        assert_eq!(p.text, "+0.00%");
        assert_eq!(p.trend, Trend::Positive);
    }

    #[test]
    fn test_display_exactly_two_decimals() {
        assert_eq!(display(Some(1.0)).text, "+1.00%");
        assert_eq!(display(Some(12.345)).text, "+12.35%");
        assert_eq!(display(Some(-12.345)).text, "-12.35%");
    }

    #[test]
    fn test_display_missing_value() {
        let p = display(None);
        assert_eq!(p.text, PLACEHOLDER);
        assert_eq!(p.trend, Trend::Neutral);
    }
}
