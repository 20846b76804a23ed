//! Application service: workspace switch use-case.
//!
//! Runs the four phases (app cleanup, VCS check, port reconciliation,
//! launch) strictly in order. Every phase absorbs its own failures into the
//! log stream; the only early exit is an unknown workspace name.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use serde::Serialize;

use crate::application::ports::{
    EnvironmentLauncher, LocalFs, LogSink, PortOutcome, ProcessTerminator,
    RepositoryStatusChecker, WorkspaceLookup,
};
use crate::domain::error::WorkspaceError;
use crate::domain::{LogEntry, LogLevel, Workspace};

/// Outcome of freeing one configured port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortReport {
    pub port: u16,
    #[serde(flatten)]
    pub outcome: PortOutcome,
}

/// Outcome of opening one configured URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlReport {
    pub url: String,
    pub opened: bool,
}

/// What a completed switch did, phase by phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchReport {
    pub workspace: String,
    pub apps_closed: Vec<String>,
    pub uncommitted_changes: bool,
    pub ports: Vec<PortReport>,
    pub editor_launched: bool,
    pub urls: Vec<UrlReport>,
}

/// Outcome of the `switch` use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The name did not resolve; nothing was touched.
    NotFound,
    /// All four phases ran.
    Completed(SwitchReport),
}

/// Stateless orchestrator over the three switch collaborators.
///
/// Holds no configuration: the lookup and the log sink are passed per call,
/// so one switcher serves any number of switches in an interactive session.
pub struct WorkspaceSwitcher<T, G, L, F> {
    terminator: T,
    repo: G,
    launcher: L,
    fs: F,
}

impl<T, G, L, F> WorkspaceSwitcher<T, G, L, F>
where
    T: ProcessTerminator,
    G: RepositoryStatusChecker,
    L: EnvironmentLauncher,
    F: LocalFs,
{
    #[must_use]
    pub fn new(terminator: T, repo: G, launcher: L, fs: F) -> Self {
        Self {
            terminator,
            repo,
            launcher,
            fs,
        }
    }

    /// Resolve `name` and run the switch. Never fails.
    pub async fn switch(
        &self,
        name: &str,
        lookup: &impl WorkspaceLookup,
        sink: &impl LogSink,
    ) -> SwitchOutcome {
        let log = SwitchLog(sink);
        let Some(workspace) = lookup.find(name) else {
            tracing::debug!(name, "workspace lookup failed");
            log.error(WorkspaceError::NotFound(name.to_string()).to_string());
            return SwitchOutcome::NotFound;
        };
        SwitchOutcome::Completed(self.run(&workspace, sink).await)
    }

    /// Run the four phases for an already-resolved workspace.
    pub async fn run(&self, workspace: &Workspace, sink: &impl LogSink) -> SwitchReport {
        let log = SwitchLog(sink);
        let display = workspace.display_name();
        log.header(format!("--- Initializing Workspace: {display} ---"));

        let apps_closed = self.close_apps(workspace, &log).await;
        let uncommitted_changes = self.check_repository(workspace, &log).await;
        let ports = self.free_ports(workspace, &log).await;
        let editor_launched = self.launch_editor(workspace, &log).await;
        let urls = self.open_urls(workspace, &log).await;

        log.success(format!("--- Execution Complete: {display} is active ---"));

        SwitchReport {
            workspace: workspace.name.clone(),
            apps_closed,
            uncommitted_changes,
            ports,
            editor_launched,
            urls,
        }
    }

    async fn close_apps<S: LogSink>(
        &self,
        workspace: &Workspace,
        log: &SwitchLog<'_, S>,
    ) -> Vec<String> {
        let mut closed = Vec::with_capacity(workspace.apps_to_close.len());
        for app in &workspace.apps_to_close {
            self.terminator.kill_by_name(app).await;
            log.step(format!("Closed {app}"));
            closed.push(app.clone());
        }
        closed
    }

    async fn check_repository<S: LogSink>(
        &self,
        workspace: &Workspace,
        log: &SwitchLog<'_, S>,
    ) -> bool {
        if !self.fs.is_dir(&workspace.path) {
            tracing::debug!(path = %workspace.path.display(), "no directory, skipping VCS check");
            return false;
        }
        let dirty = self.repo.has_uncommitted_changes(&workspace.path).await;
        if dirty {
            log.warn(format!(
                "Uncommitted git changes detected in {}",
                workspace.path.display()
            ));
        }
        dirty
    }

    async fn free_ports<S: LogSink>(
        &self,
        workspace: &Workspace,
        log: &SwitchLog<'_, S>,
    ) -> Vec<PortReport> {
        let mut reports = Vec::with_capacity(workspace.ports.len());
        for &port in &workspace.ports {
            let outcome = self.terminator.kill_by_port(port).await;
            match &outcome {
                PortOutcome::Freed { pids } => log.success(format!(
                    "Terminated process tree on port {port} ({})",
                    describe_pids(pids)
                )),
                PortOutcome::AlreadyFree => log.info(format!("Port {port} is available.")),
            }
            reports.push(PortReport { port, outcome });
        }
        reports
    }

    async fn launch_editor<S: LogSink>(
        &self,
        workspace: &Workspace,
        log: &SwitchLog<'_, S>,
    ) -> bool {
        let editor = self.launcher.editor();
        log.step(launch_message(editor, &workspace.path));
        match self.launcher.open_editor(&workspace.path).await {
            Ok(()) => true,
            Err(e) => {
                log.warn(format!("Editor '{editor}' failed to launch: {e}"));
                false
            }
        }
    }

    async fn open_urls<S: LogSink>(
        &self,
        workspace: &Workspace,
        log: &SwitchLog<'_, S>,
    ) -> Vec<UrlReport> {
        let mut reports = Vec::with_capacity(workspace.urls.len());
        for url in &workspace.urls {
            log.step(format!("Opening {url}"));
            let opened = match self.launcher.open_url(url).await {
                Ok(()) => true,
                Err(e) => {
                    log.warn(format!("Could not open {url}: {e}"));
                    false
                }
            };
            reports.push(UrlReport {
                url: url.clone(),
                opened,
            });
        }
        reports
    }
}

fn launch_message(editor: &str, path: &Path) -> String {
    if path.as_os_str().is_empty() {
        format!("Launching editor '{editor}'")
    } else {
        format!("Launching editor '{editor}' on {}", path.display())
    }
}

fn describe_pids(pids: &[u32]) -> String {
    let list = pids
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if pids.len() == 1 {
        format!("pid {list}")
    } else {
        format!("pids {list}")
    }
}

/// Level-stamping wrapper around the caller's sink.
struct SwitchLog<'a, S>(&'a S);

impl<S: LogSink> SwitchLog<'_, S> {
    fn emit(&self, level: LogLevel, message: String) {
        tracing::info!(level = level.as_str(), "{message}");
        self.0.emit(LogEntry::now(level, message));
    }

    fn header(&self, message: String) {
        self.emit(LogLevel::Header, message);
    }

    fn step(&self, message: String) {
        self.emit(LogLevel::Step, message);
    }

    fn success(&self, message: String) {
        self.emit(LogLevel::Success, message);
    }

    fn info(&self, message: String) {
        self.emit(LogLevel::Info, message);
    }

    fn warn(&self, message: String) {
        self.emit(LogLevel::Warn, message);
    }

    fn error(&self, message: String) {
        self.emit(LogLevel::Error, message);
    }
}
