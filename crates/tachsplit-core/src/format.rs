//! Fixed-decimal display formatting.

use crate::options::Precision;

/// Format an hours value for display at the given precision.
///
/// Renders a fixed number of decimal places with no locale grouping, so
/// zero renders as `0.00` (or `0.0`). Negative zero is folded into
/// positive zero so the summary never shows `-0.00`.
///
/// # Example
/// ```
/// use tachsplit_core::format::format_hours;
/// use tachsplit_core::options::Precision;
///
/// assert_eq!(format_hours(2.25, Precision::Hundredths), "2.25");
/// assert_eq!(format_hours(0.0, Precision::Hundredths), "0.00");
/// assert_eq!(format_hours(1.5, Precision::Tenths), "1.5");
/// ```
#[must_use]
pub fn format_hours(value: f64, precision: Precision) -> String {
    // 0.0 == -0.0, so this also folds negative zero.
    let value = if value == 0.0 { 0.0 } else { value };
    let decimals = precision.decimals();
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundredths_pads_to_two_places() {
        assert_eq!(format_hours(0.0, Precision::Hundredths), "0.00");
        assert_eq!(format_hours(1.5, Precision::Hundredths), "1.50");
        assert_eq!(format_hours(2.25, Precision::Hundredths), "2.25");
    }

    #[test]
    fn tenths_pads_to_one_place() {
        assert_eq!(format_hours(0.0, Precision::Tenths), "0.0");
        assert_eq!(format_hours(2.0, Precision::Tenths), "2.0");
        assert_eq!(format_hours(0.75, Precision::Tenths), "0.8");
    }

    #[test]
    fn negative_values_format() {
        assert_eq!(format_hours(-3.0, Precision::Hundredths), "-3.00");
        assert_eq!(format_hours(-1.5, Precision::Hundredths), "-1.50");
    }

    #[test]
    fn negative_zero_normalized() {
        assert_eq!(format_hours(-0.0, Precision::Hundredths), "0.00");
        assert_eq!(format_hours(-0.0, Precision::Tenths), "0.0");
    }

    #[test]
    fn no_grouping_for_large_values() {
        assert_eq!(format_hours(12345.6, Precision::Hundredths), "12345.60");
    }

    #[test]
    fn idempotent_on_own_output() {
        for value in [0.0, 1.5, 2.25, -3.0, 0.1, 1234.56, 0.005] {
            for precision in [Precision::Hundredths, Precision::Tenths] {
                let once = format_hours(value, precision);
                let reparsed: f64 = once.parse().unwrap();
                assert_eq!(format_hours(reparsed, precision), once, "value {value}");
            }
        }
    }
}
