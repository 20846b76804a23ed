//! Version-control status: implements `RepositoryStatusChecker` with `git`.

use std::path::Path;

use crate::application::ports::{CommandRunner, RepositoryStatusChecker};
use crate::domain::process::git_status_command;

/// Asks `git status --short` whether the working tree has pending changes.
pub struct GitStatusChecker<R> {
    runner: R,
}

impl<R: CommandRunner> GitStatusChecker<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> RepositoryStatusChecker for GitStatusChecker<R> {
    async fn has_uncommitted_changes(&self, path: &Path) -> bool {
        let cmd = git_status_command(path);
        match self.runner.run(&cmd.program, &cmd.arg_refs()).await {
            Ok(out) if out.status.success() => {
                !String::from_utf8_lossy(&out.stdout).trim().is_empty()
            }
            Ok(out) => {
                tracing::debug!(path = %path.display(), status = %out.status, "not a git repository");
                false
            }
            Err(e) => {
                tracing::debug!(error = %e, "git unavailable");
                false
            }
        }
    }
}
