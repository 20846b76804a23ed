//! `switchblade init`: write the sample configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Run `switchblade init`.
///
/// # Errors
///
/// Returns an error if the existing file cannot be read or the sample
/// cannot be written.
pub fn run(app: &AppContext, args: &InitArgs) -> Result<ExitCode> {
    let path = app.config_store.path()?;
    if config_service::init_config(&app.config_store, args.force)? {
        app.output
            .success(&format!("Wrote sample configuration to {}", path.display()));
    } else {
        app.output
            .info(&format!("Configuration already exists at {}", path.display()));
        app.output.info("Overwrite it: switchblade init --force");
    }
    Ok(ExitCode::SUCCESS)
}
