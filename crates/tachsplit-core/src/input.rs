//! Input acceptance policy for the two reading fields.

/// Keystroke acceptance policy for a reading field.
///
/// Both observed policies are implemented; pick one explicitly per
/// field set. They differ on invalid keystrokes: `Constrained` blocks
/// them at the boundary, `Verbatim` lets them through and the deferred
/// parse absorbs them as 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Only digits and a single decimal point may be entered; any other
    /// candidate is silently ignored and the previous value kept.
    #[default]
    Constrained,
    /// Any text is stored verbatim.
    Verbatim,
}

/// Whether `candidate` is a valid partial decimal entry.
///
/// Accepts the empty string (an unset field) and any run of ASCII
/// digits containing at most one `.`.
#[must_use]
pub fn is_partial_decimal(candidate: &str) -> bool {
    let mut seen_dot = false;
    for c in candidate.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

/// Apply an edited candidate value to a field under the given policy.
///
/// Returns the new value to store: the candidate if accepted, the
/// previous value unchanged if rejected. Rejection is silent; no error
/// is surfaced.
#[must_use]
pub fn apply_keystroke(policy: InputPolicy, previous: &str, candidate: &str) -> String {
    match policy {
        InputPolicy::Constrained if !is_partial_decimal(candidate) => previous.to_string(),
        InputPolicy::Constrained | InputPolicy::Verbatim => candidate.to_string(),
    }
}
