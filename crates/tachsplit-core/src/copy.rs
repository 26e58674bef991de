//! Clipboard export of the check-in time.

use crate::clipboard::{ClipboardSink, CopyError};
use crate::derive::derive;
use crate::format::format_hours;
use crate::options::SplitOptions;

/// Format the current check-in time and write it to the sink.
///
/// The check-in value is recomputed from the raw inputs at export time
/// so the copied text always reflects the latest readings. Returns the
/// copied text on success; on failure the caller logs the error and
/// leaves the confirmation indicator unarmed.
pub fn copy_check_in(
    start_raw: &str,
    end_raw: &str,
    opts: &SplitOptions,
    sink: &mut dyn ClipboardSink,
) -> Result<String, CopyError> {
    let totals = derive(start_raw, end_raw, opts);
    let text = format_hours(totals.check_in, opts.precision);
    sink.write_text(&text)?;
    tracing::debug!(%text, "check-in time copied");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Precision;

    /// Records writes instead of touching the real clipboard.
    #[derive(Default)]
    struct MemorySink {
        writes: Vec<String>,
    }

    impl ClipboardSink for MemorySink {
        fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    /// Rejects every write.
    struct RejectingSink;

    impl ClipboardSink for RejectingSink {
        fn write_text(&mut self, _text: &str) -> Result<(), CopyError> {
            Err(CopyError::Write("denied".into()))
        }
    }

    #[test]
    fn copies_formatted_check_in() {
        let mut sink = MemorySink::default();
        let opts = SplitOptions::default();
        let text = copy_check_in("1.5", "3.0", &opts, &mut sink).unwrap();
        assert_eq!(text, "2.25");
        assert_eq!(sink.writes, vec!["2.25"]);
    }

    #[test]
    fn copy_respects_precision() {
        let mut sink = MemorySink::default();
        let opts = SplitOptions {
            precision: Precision::Tenths,
            ..Default::default()
        };
        let text = copy_check_in("1", "2", &opts, &mut sink).unwrap();
        assert_eq!(text, "1.5");
    }

    #[test]
    fn copy_reflects_current_inputs() {
        // Not cached: a second export after an edit copies the new value.
        let mut sink = MemorySink::default();
        let opts = SplitOptions::default();
        copy_check_in("1.5", "3.0", &opts, &mut sink).unwrap();
        copy_check_in("1.5", "4.0", &opts, &mut sink).unwrap();
        assert_eq!(sink.writes, vec!["2.25", "2.75"]);
    }

    #[test]
    fn copy_of_empty_form_exports_zero() {
        let mut sink = MemorySink::default();
        let opts = SplitOptions::default();
        let text = copy_check_in("", "", &opts, &mut sink).unwrap();
        assert_eq!(text, "0.00");
    }

    #[test]
    fn sink_failure_propagates() {
        let mut sink = RejectingSink;
        let opts = SplitOptions::default();
        let err = copy_check_in("1.5", "3.0", &opts, &mut sink).unwrap_err();
        assert!(matches!(err, CopyError::Write(_)));
    }
}
