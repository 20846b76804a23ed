//! `switchblade switch`: run one workspace switch.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::workspace_switch::SwitchOutcome;
use crate::output::TerminalLogSink;
use crate::output::json::{BufferedLogSink, format_switch};

/// Arguments for the switch command.
#[derive(Args)]
pub struct SwitchArgs {
    /// Workspace name (case-insensitive)
    pub name: String,
}

/// Run `switchblade switch <name>`.
///
/// Exits 1 when the workspace does not exist; every other problem is part
/// of the switch log and leaves the exit code at 0.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub async fn run(app: &AppContext, args: &SwitchArgs) -> Result<ExitCode> {
    let config = super::load_config(app)?;

    let outcome = if app.is_json() {
        let buffer = BufferedLogSink::new();
        let outcome = app
            .switcher
            .switch(&args.name, &config, &(&buffer, &app.file_sink))
            .await;
        app.output
            .line_always(&format_switch(&args.name, &outcome, &buffer.drain())?);
        outcome
    } else {
        let console = TerminalLogSink::new(&app.output);
        app.switcher
            .switch(&args.name, &config, &(console, &app.file_sink))
            .await
    };

    Ok(match outcome {
        SwitchOutcome::NotFound => ExitCode::FAILURE,
        SwitchOutcome::Completed(_) => ExitCode::SUCCESS,
    })
}
