//! CLI result presenter.

use tachsplit_core::{format_hours, Precision, Totals};

use crate::output::{render_json, render_summary};

/// Presents the flight summary on stdout.
pub struct CLISummaryPresenter {
    quiet: bool,
    json: bool,
}

impl CLISummaryPresenter {
    #[must_use]
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Print the summary in the configured mode.
    ///
    /// JSON wins over quiet; quiet prints only the check-in value (the
    /// number a pilot actually passes along).
    pub fn present(&self, totals: &Totals, precision: Precision) {
        if self.json {
            match render_json(totals) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    tracing::error!(error = %e, "failed to serialize summary");
                    self.present_error(&e.to_string());
                }
            }
            return;
        }

        if self.quiet {
            println!("{}", format_hours(totals.check_in, precision));
            return;
        }

        println!("{}", render_summary(totals, precision));
    }

    /// Report a non-fatal error.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tachsplit_core::{derive, SplitOptions};

    #[test]
    fn presenter_quiet_mode() {
        let presenter = CLISummaryPresenter::new(true, false);
        assert!(presenter.quiet);
        assert!(!presenter.json);
    }

    #[test]
    fn presenter_present_normal() {
        let presenter = CLISummaryPresenter::new(false, false);
        let totals = derive("1.5", "3.0", &SplitOptions::default());
        presenter.present(&totals, Precision::Hundredths);
        // Should not panic
    }

    #[test]
    fn presenter_present_quiet() {
        let presenter = CLISummaryPresenter::new(true, false);
        let totals = derive("1.5", "3.0", &SplitOptions::default());
        presenter.present(&totals, Precision::Hundredths);
    }

    #[test]
    fn presenter_present_json() {
        let presenter = CLISummaryPresenter::new(false, true);
        let totals = derive("1.5", "3.0", &SplitOptions::default());
        presenter.present(&totals, Precision::Hundredths);
    }

    #[test]
    fn presenter_present_negative_totals() {
        let presenter = CLISummaryPresenter::new(false, false);
        let totals = derive("5", "2", &SplitOptions::default());
        presenter.present(&totals, Precision::Hundredths);
    }

    #[test]
    fn presenter_present_error() {
        let presenter = CLISummaryPresenter::new(false, false);
        presenter.present_error("test error message");
    }
}
