//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution, with an optional timeout that kills the
//! child on expiry.

use std::future::Future;
use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`.
///
/// With no timeout, calls wait for the child for as long as it takes.
/// `tokio::time::timeout` around `.output().await` would leave the OS process
/// running on Windows, so the timeout path races a sleep with `tokio::select!`
/// and relies on `kill_on_drop` to reap the child.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner {
    timeout: Option<Duration>,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn spawn(program: &str, args: &[&str], capture: bool) -> Result<Child> {
        tracing::debug!(program, ?args, capture, "running command");
        let pipe = || if capture { Stdio::piped() } else { Stdio::null() };
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(pipe())
            .stderr(pipe())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))
    }

    /// Await `work`, giving up after the configured timeout.
    async fn bounded<T>(
        &self,
        program: &str,
        work: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let Some(timeout) = self.timeout else {
            return work.await;
        };
        tokio::select! {
            result = work => result,
            () = tokio::time::sleep(timeout) => {
                // kill_on_drop reaps the child on return.
                anyhow::bail!("{program} timed out after {timeout:?}")
            }
        }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = Self::spawn(program, args, true)?;
        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        let wait = async {
            let (status, stdout, stderr) = tokio::join!(
                child.wait(),
                async {
                    let mut buf = Vec::new();
                    if let Some(ref mut h) = stdout_handle {
                        let _ = h.read_to_end(&mut buf).await;
                    }
                    buf
                },
                async {
                    let mut buf = Vec::new();
                    if let Some(ref mut h) = stderr_handle {
                        let _ = h.read_to_end(&mut buf).await;
                    }
                    buf
                },
            );
            Ok::<Output, anyhow::Error>(Output {
                status: status.with_context(|| format!("waiting for {program}"))?,
                stdout,
                stderr,
            })
        };
        self.bounded(program, wait).await
    }

    async fn status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let mut child = Self::spawn(program, args, false)?;
        let wait = async {
            child
                .wait()
                .await
                .with_context(|| format!("waiting for {program}"))
        };
        self.bounded(program, wait).await
    }

    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<()> {
        tracing::debug!(program, ?args, "spawning detached");
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;
        Ok(())
    }
}
