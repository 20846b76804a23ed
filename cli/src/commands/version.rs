//! `switchblade version`: print the build version.

use std::process::ExitCode;

use crate::app::AppContext;

/// Run `switchblade version`. Printed even with `--quiet`.
pub fn run(app: &AppContext) -> ExitCode {
    let version = env!("CARGO_PKG_VERSION");
    let text = if app.is_json() {
        serde_json::json!({ "version": version }).to_string()
    } else {
        format!("switchblade {version}")
    };
    app.output.line_always(&text);
    ExitCode::SUCCESS
}
