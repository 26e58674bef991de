#![no_main]

use libfuzzer_sys::fuzz_target;
use tachsplit_core::input::{apply_keystroke, is_partial_decimal, InputPolicy};

// A constrained field must stay valid no matter what candidate text
// arrives, and a rejected candidate must leave the field untouched.
fuzz_target!(|data: (&str, &str)| {
    let (previous, candidate) = data;

    let valid_previous = if is_partial_decimal(previous) {
        previous
    } else {
        ""
    };

    let stored = apply_keystroke(InputPolicy::Constrained, valid_previous, candidate);
    assert!(is_partial_decimal(&stored));
    if !is_partial_decimal(candidate) {
        assert_eq!(stored, valid_previous);
    }

    // Verbatim always stores the candidate.
    assert_eq!(
        apply_keystroke(InputPolicy::Verbatim, valid_previous, candidate),
        candidate
    );
});
