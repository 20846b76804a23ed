//! Environment launch: implements `EnvironmentLauncher` with the editor's
//! own CLI and the platform URL handler.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, EnvironmentLauncher};
use crate::domain::error::LaunchError;
use crate::domain::process::{self, Platform};

/// Default editor command (VS Code's CLI shim).
pub const DEFAULT_EDITOR: &str = "code";

/// Production `EnvironmentLauncher`.
pub struct SystemLauncher<R> {
    runner: R,
    platform: Platform,
    editor: String,
}

impl<R: CommandRunner> SystemLauncher<R> {
    #[must_use]
    pub fn new(runner: R, platform: Platform, editor: impl Into<String>) -> Self {
        Self {
            runner,
            platform,
            editor: editor.into(),
        }
    }
}

impl<R: CommandRunner> EnvironmentLauncher for SystemLauncher<R> {
    fn editor(&self) -> &str {
        &self.editor
    }

    async fn open_editor(&self, path: &Path) -> Result<()> {
        let target = (!path.as_os_str().is_empty()).then_some(path);
        let cmd = process::editor_command(self.platform, &self.editor, target);
        self.runner
            .spawn_detached(&cmd.program, &cmd.arg_refs())
            .map_err(|e| LaunchError::Spawn {
                program: cmd.program.clone(),
                reason: format!("{e:#}"),
            })?;
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        let cmd = process::open_url_command(self.platform, url);
        // Handlers hand the URL to a browser that may inherit their stdio,
        // so only the exit status is awaited.
        let status = self
            .runner
            .status(&cmd.program, &cmd.arg_refs())
            .await
            .map_err(|e| LaunchError::Spawn {
                program: cmd.program.clone(),
                reason: format!("{e:#}"),
            })?;
        if !status.success() {
            return Err(LaunchError::Exit {
                program: cmd.program,
                status: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
