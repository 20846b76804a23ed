//! `switchblade list`: enumerate configured workspaces.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::output::HumanRenderer;

/// Run `switchblade list`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let config = super::load_config(app)?;
    if app.is_json() {
        let json = serde_json::to_string_pretty(&config).context("JSON serialization failed")?;
        app.output.line_always(&json);
    } else {
        HumanRenderer::new(&app.output).render_workspaces(&config);
    }
    Ok(ExitCode::SUCCESS)
}
