//! Split options: the observed policy variants, selectable explicitly.

use crate::input::InputPolicy;

/// Rounding policy for the elapsed total.
///
/// The two variants produce different results downstream (per-person
/// time is halved from a pre-rounded vs exact total), so the choice is
/// explicit rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// Exact difference; only the display step rounds.
    #[default]
    Exact,
    /// Round the difference to the nearest 0.1 immediately after
    /// subtraction, before any further derivation.
    TenthsFirst,
}

/// Display precision, applied uniformly to every summary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Two decimal places (`2.25`).
    #[default]
    Hundredths,
    /// One decimal place (`2.2`).
    Tenths,
}

impl Precision {
    /// Number of decimal places rendered.
    #[must_use]
    pub fn decimals(self) -> usize {
        match self {
            Precision::Hundredths => 2,
            Precision::Tenths => 1,
        }
    }
}

/// Options for the split pipeline.
///
/// The defaults mirror the constrained two-decimal exact-difference
/// variant of the calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    /// Keystroke acceptance policy for the reading fields.
    pub input: InputPolicy,
    /// Rounding policy for the elapsed total.
    pub rounding: RoundingPolicy,
    /// Display precision for all summary values.
    pub precision: Precision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = SplitOptions::default();
        assert_eq!(opts.input, InputPolicy::Constrained);
        assert_eq!(opts.rounding, RoundingPolicy::Exact);
        assert_eq!(opts.precision, Precision::Hundredths);
    }

    #[test]
    fn precision_decimals() {
        assert_eq!(Precision::Hundredths.decimals(), 2);
        assert_eq!(Precision::Tenths.decimals(), 1);
    }
}
