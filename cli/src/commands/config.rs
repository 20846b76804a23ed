//! `switchblade config`: inspect the configuration.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file location
    Path,
    /// Print the parsed configuration
    Show,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the location cannot be determined or the
/// configuration cannot be loaded.
pub fn run(app: &AppContext, cmd: &ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Path => {
            let path = app.config_store.path()?;
            if app.is_json() {
                let json = serde_json::json!({ "path": path });
                app.output.line_always(&json.to_string());
            } else {
                app.output.line_always(&path.display().to_string());
            }
        }
        ConfigCommand::Show => {
            let config = super::load_config(app)?;
            let json =
                serde_json::to_string_pretty(&config).context("JSON serialization failed")?;
            app.output.line_always(&json);
        }
    }
    Ok(ExitCode::SUCCESS)
}
