//! Error handling and exit codes.

use tachsplit_core::exit_codes;
use tachsplit_core::CopyError;

/// Map a copy error to the appropriate exit code.
#[allow(dead_code)]
pub fn handle_error(err: &CopyError) -> i32 {
    match err {
        CopyError::Unavailable(_) | CopyError::Write(_) => exit_codes::ERROR_CLIPBOARD,
    }
}
