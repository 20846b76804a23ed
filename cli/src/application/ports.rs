//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use anyhow::Result;
use serde::Serialize;

use crate::domain::{LogEntry, Workspace, WorkspaceConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations apply their configured default timeout, if any.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with stdio detached and wait for its exit status only.
    ///
    /// For hand-off tools (URL handlers) whose children may hold inherited
    /// pipes open long after the tool itself has exited.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// configured timeout.
    async fn status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
    /// Start a program that outlives the caller. Stdio is detached.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<()>;
}

// ── Switch Collaborator Ports ─────────────────────────────────────────────────

/// Result of freeing a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PortOutcome {
    /// Owners were found and a kill was issued for each (with descendants).
    Freed { pids: Vec<u32> },
    /// No owner was found, or the lookup tool could not answer.
    AlreadyFree,
}

/// Locates and forcibly stops OS processes. Never fails: a missing target
/// or a refused kill is "nothing to do".
#[allow(async_fn_in_trait)]
pub trait ProcessTerminator {
    /// Stop every process matching `name`, with descendants where supported.
    async fn kill_by_name(&self, name: &str);
    /// Stop every process listening on `port`, with descendants.
    async fn kill_by_port(&self, port: u16) -> PortOutcome;
}

/// Advisory version-control check.
#[allow(async_fn_in_trait)]
pub trait RepositoryStatusChecker {
    /// `true` only when the tool ran and reported pending changes.
    async fn has_uncommitted_changes(&self, path: &Path) -> bool;
}

/// Starts the editor and opens URLs.
#[allow(async_fn_in_trait)]
pub trait EnvironmentLauncher {
    /// Name of the editor program, for log lines.
    fn editor(&self) -> &str;
    /// Start the editor on `path` without waiting for it.
    async fn open_editor(&self, path: &Path) -> Result<()>;
    /// Open `url` in the default handler.
    async fn open_url(&self, url: &str) -> Result<()>;
}

/// Filesystem queries the switch needs.
pub trait LocalFs {
    fn is_dir(&self, path: &Path) -> bool;
}

// ── Log Sink Port ─────────────────────────────────────────────────────────────

/// Receives the ordered switch log. Sync and infallible: a sink that can no
/// longer write (closed terminal, full disk) drops the entry.
pub trait LogSink {
    fn emit(&self, entry: LogEntry);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn emit(&self, entry: LogEntry) {
        (**self).emit(entry);
    }
}

impl<S: LogSink> LogSink for Option<S> {
    fn emit(&self, entry: LogEntry) {
        if let Some(sink) = self {
            sink.emit(entry);
        }
    }
}

/// Fan-out: every entry goes to both sinks, in order.
impl<A: LogSink, B: LogSink> LogSink for (A, B) {
    fn emit(&self, entry: LogEntry) {
        self.0.emit(entry.clone());
        self.1.emit(entry);
    }
}

// ── Configuration Ports ───────────────────────────────────────────────────────

/// Resolves workspace names to records.
pub trait WorkspaceLookup {
    /// Case-insensitive lookup.
    fn find(&self, name: &str) -> Option<Workspace>;
    /// All workspace names, sorted.
    fn names(&self) -> Vec<String>;
}

impl WorkspaceLookup for WorkspaceConfig {
    fn find(&self, name: &str) -> Option<Workspace> {
        WorkspaceConfig::find(self, name)
    }

    fn names(&self) -> Vec<String> {
        WorkspaceConfig::names(self)
    }
}

/// Abstracts persistence of the workspace definitions.
pub trait ConfigStore {
    /// Load the definitions. `Ok(None)` when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<WorkspaceConfig>>;
    /// Persist the definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &WorkspaceConfig) -> Result<()>;
    /// Where the definitions live.
    ///
    /// # Errors
    ///
    /// Returns an error if no location can be determined.
    fn path(&self) -> Result<PathBuf>;
}
