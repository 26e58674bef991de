//! Raw tach reading parsing.

/// Parse a raw tach reading into hours.
///
/// An empty, unparsable, or non-finite reading maps to 0.0 so the form
/// is always computable; the parse is deferred and never raised as an
/// error.
///
/// # Example
/// ```
/// use tachsplit_core::reading::parse_reading;
///
/// assert!((parse_reading("1.5") - 1.5).abs() < f64::EPSILON);
/// assert!((parse_reading("") - 0.0).abs() < f64::EPSILON);
/// assert!((parse_reading("garbage") - 0.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn parse_reading(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
