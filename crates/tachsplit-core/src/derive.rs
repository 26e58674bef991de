//! Derivation of the flight summary from raw inputs.

use crate::constants::PILOT_COUNT;
use crate::options::{RoundingPolicy, SplitOptions};
use crate::reading::parse_reading;

/// Derived flight summary values, in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Totals {
    /// Elapsed tach time (end minus start). Negative when the readings
    /// are entered in the wrong order; that is displayed, not treated
    /// as an error.
    pub total: f64,
    /// Each pilot's share: exactly half the total.
    pub per_person: f64,
    /// Tach reading at which the first pilot checks in.
    pub check_in: f64,
}

/// Round a value to the nearest tenth of an hour.
#[must_use]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derive the flight summary from the two raw readings.
///
/// Pure and recomputed on demand: callers invoke this at read and
/// export time rather than caching the result, so the summary always
/// reflects the latest inputs.
#[must_use]
pub fn derive(start_raw: &str, end_raw: &str, opts: &SplitOptions) -> Totals {
    let start = parse_reading(start_raw);
    let end = parse_reading(end_raw);

    let total = match opts.rounding {
        RoundingPolicy::Exact => end - start,
        RoundingPolicy::TenthsFirst => round_tenths(end - start),
    };

    // Half the total, never rounded at this stage under either policy.
    let per_person = total / PILOT_COUNT;
    let check_in = start + per_person;

    Totals {
        total,
        per_person,
        check_in,
    }
}
