//! CLI summary formatting.

use tachsplit_core::{format_hours, Precision, Totals};

/// Render the flight summary as display lines.
#[must_use]
pub fn render_summary(totals: &Totals, precision: Precision) -> String {
    format!(
        "Total Time: {} hrs\n\
         Time Per Person: {} hrs\n\
         Person 1 Check-in Time: {} hrs",
        format_hours(totals.total, precision),
        format_hours(totals.per_person, precision),
        format_hours(totals.check_in, precision),
    )
}

/// Render the totals as a single JSON line.
///
/// Values are emitted as raw numbers; display precision applies only to
/// the human-readable summary.
pub fn render_json(totals: &Totals) -> serde_json::Result<String> {
    serde_json::to_string(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tachsplit_core::{derive, SplitOptions};

    #[test]
    fn summary_lines() {
        let totals = derive("1.5", "3.0", &SplitOptions::default());
        let summary = render_summary(&totals, Precision::Hundredths);
        assert_eq!(
            summary,
            "Total Time: 1.50 hrs\nTime Per Person: 0.75 hrs\nPerson 1 Check-in Time: 2.25 hrs"
        );
    }

    #[test]
    fn summary_negative_duration_renders() {
        let totals = derive("5", "2", &SplitOptions::default());
        let summary = render_summary(&totals, Precision::Hundredths);
        assert!(summary.contains("Total Time: -3.00 hrs"));
        assert!(summary.contains("Time Per Person: -1.50 hrs"));
        assert!(summary.contains("Person 1 Check-in Time: 3.50 hrs"));
    }

    #[test]
    fn summary_empty_form_is_zeroes() {
        let totals = derive("", "", &SplitOptions::default());
        let summary = render_summary(&totals, Precision::Hundredths);
        assert!(summary.contains("Total Time: 0.00 hrs"));
    }

    #[test]
    fn summary_precision_applies_uniformly() {
        let totals = derive("1", "2", &SplitOptions::default());
        let summary = render_summary(&totals, Precision::Tenths);
        assert!(summary.contains("Total Time: 1.0 hrs"));
        assert!(summary.contains("Time Per Person: 0.5 hrs"));
        assert!(summary.contains("Person 1 Check-in Time: 1.5 hrs"));
    }

    #[test]
    fn json_output() {
        let totals = derive("1.5", "3.0", &SplitOptions::default());
        let json = render_json(&totals).unwrap();
        assert!(json.contains("\"total\":1.5"));
        assert!(json.contains("\"per_person\":0.75"));
        assert!(json.contains("\"check_in\":2.25"));
    }
}
