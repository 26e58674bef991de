//! Constants for the split pipeline and process exit codes.

use std::time::Duration;

/// How long the copy confirmation stays visible after a successful
/// clipboard write.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

/// How many pilots share the elapsed time.
pub const PILOT_COUNT: f64 = 2.0;

/// Exit codes for the `tachsplit` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Clipboard write failed when the copy was the requested action.
    pub const ERROR_CLIPBOARD: i32 = 2;
    /// Invalid configuration (unknown policy value).
    pub const ERROR_CONFIG: i32 = 4;
}
