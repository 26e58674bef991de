//! Application configuration from CLI flags and environment.

use anyhow::Result;
use clap::Parser;

use tachsplit_core::{InputPolicy, Precision, RoundingPolicy, SplitOptions};

/// TachSplit — split tach time between two pilots.
#[derive(Parser, Debug)]
#[command(name = "tachsplit", version, about)]
pub struct AppConfig {
    /// Checkout (start) tach reading.
    #[arg(short, long, default_value = "", env = "TACHSPLIT_START")]
    pub start: String,

    /// End tach reading.
    #[arg(short, long, default_value = "", env = "TACHSPLIT_END")]
    pub end: String,

    /// Rounding policy for the elapsed total: exact or tenths.
    #[arg(long, default_value = "exact")]
    pub rounding: String,

    /// Display precision: hundredths or tenths.
    #[arg(long, default_value = "hundredths")]
    pub precision: String,

    /// Input policy for field editing: constrained or verbatim.
    #[arg(long, default_value = "constrained")]
    pub input_policy: String,

    /// Copy the check-in time to the system clipboard.
    #[arg(short, long)]
    pub copy: bool,

    /// Quiet mode (only output the check-in time).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve the policy flags into split options.
    pub fn split_options(&self) -> Result<SplitOptions> {
        let rounding = match self.rounding.as_str() {
            "exact" => RoundingPolicy::Exact,
            "tenths" => RoundingPolicy::TenthsFirst,
            other => anyhow::bail!("unknown rounding policy: {other} (expected exact or tenths)"),
        };

        let precision = match self.precision.as_str() {
            "hundredths" => Precision::Hundredths,
            "tenths" => Precision::Tenths,
            other => {
                anyhow::bail!("unknown precision: {other} (expected hundredths or tenths)")
            }
        };

        let input = match self.input_policy.as_str() {
            "constrained" => InputPolicy::Constrained,
            "verbatim" => InputPolicy::Verbatim,
            other => {
                anyhow::bail!("unknown input policy: {other} (expected constrained or verbatim)")
            }
        };

        Ok(SplitOptions {
            input,
            rounding,
            precision,
        })
    }
}
