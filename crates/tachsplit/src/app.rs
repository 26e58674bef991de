//! Application entry point and dispatch.

use anyhow::Result;

use tachsplit_cli::presenter::CLISummaryPresenter;
use tachsplit_core::{copy_check_in, derive, SplitOptions, SystemClipboard};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        tachsplit_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let opts = config.split_options()?;

    // Handle TUI mode
    if config.tui {
        return run_tui(config, opts);
    }

    // CLI mode
    run_cli(config, opts)
}

fn run_cli(config: &AppConfig, opts: SplitOptions) -> Result<()> {
    let totals = derive(&config.start, &config.end, &opts);

    let presenter = CLISummaryPresenter::new(config.quiet, config.json);
    presenter.present(&totals, opts.precision);

    if config.copy {
        let mut sink = SystemClipboard::new();
        match copy_check_in(&config.start, &config.end, &opts, &mut sink) {
            Ok(text) => {
                if !config.quiet && !config.json {
                    println!("Copied {text} to clipboard.");
                }
            }
            Err(e) => {
                // The copy was the requested action here, so its
                // failure is the command's failure.
                tracing::warn!(error = %e, "clipboard write failed");
                presenter.present_error(&e.to_string());
                anyhow::bail!("{e}");
            }
        }
    }

    Ok(())
}

fn run_tui(config: &AppConfig, opts: SplitOptions) -> Result<()> {
    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<tachsplit_tui::TuiMessage>();

    let mut app = tachsplit_tui::TachApp::new(rx, tx, opts);
    app.set_readings(&config.start, &config.end);

    // Run the TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
