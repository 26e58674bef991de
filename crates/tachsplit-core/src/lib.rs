//! # tachsplit-core
//!
//! Core library for the TachSplit tach-time calculator.
//! Implements the input-policy, derivation, formatting, and clipboard
//! export pipeline; no UI dependencies.

pub mod clipboard;
pub mod constants;
pub mod copy;
pub mod derive;
pub mod format;
pub mod indicator;
pub mod input;
pub mod options;
pub mod reading;

// Re-exports
pub use clipboard::{ClipboardSink, CopyError, SystemClipboard};
pub use constants::{exit_codes, COPY_FEEDBACK_WINDOW};
pub use copy::copy_check_in;
pub use derive::{derive, round_tenths, Totals};
pub use format::format_hours;
pub use indicator::CopyIndicator;
pub use input::{apply_keystroke, InputPolicy};
pub use options::{Precision, RoundingPolicy, SplitOptions};
pub use reading::parse_reading;

/// Split the elapsed tach time between two pilots using default options.
///
/// This is a convenience function for simple use cases. For explicit
/// policy control (rounding, precision, input policy), use [`derive`]
/// with [`SplitOptions`].
///
/// # Example
/// ```
/// let totals = tachsplit_core::split("1.5", "3.0");
/// assert!((totals.total - 1.5).abs() < f64::EPSILON);
/// assert!((totals.per_person - 0.75).abs() < f64::EPSILON);
/// assert!((totals.check_in - 2.25).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn split(start_raw: &str, end_raw: &str) -> Totals {
    derive(start_raw, end_raw, &SplitOptions::default())
}
