//! `switchblade session`: interactive workspace picker.
//!
//! Loads the configuration once, then offers "Switch to <NAME>" entries
//! until the user quits. Each pick runs a full switch.

use std::process::ExitCode;

use anyhow::Result;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use crate::app::AppContext;
use crate::output::TerminalLogSink;

const QUIT: &str = "Quit";

/// Run the interactive session.
///
/// # Errors
///
/// Returns an error if no terminal is attached, the configuration cannot be
/// loaded, or the prompt fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    if !app.output.is_tty {
        anyhow::bail!(
            "interactive session needs a terminal. Use: switchblade switch <name>"
        );
    }
    let config = super::load_config(app)?;
    let names = config.names();
    if names.is_empty() {
        app.output.info("No workspaces configured. Run: switchblade init");
        return Ok(ExitCode::SUCCESS);
    }

    let mut items: Vec<String> = names
        .iter()
        .map(|name| format!("Switch to {}", name.to_uppercase()))
        .collect();
    items.push(QUIT.to_string());

    let console = TerminalLogSink::new(&app.output);
    let sink = (console, &app.file_sink);
    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("SwitchBlade")
            .items(&items)
            .default(0)
            .interact_opt()?;
        let Some(name) = choice.and_then(|idx| names.get(idx)).cloned() else {
            break;
        };
        app.switcher.switch(&name, &config, &sink).await;
    }
    Ok(ExitCode::SUCCESS)
}
