//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()`. The platform is detected here, once, and
//! baked into the infra adapters; nothing re-dispatches per call.

use std::path::PathBuf;
use std::time::Duration;

use crate::application::services::workspace_switch::WorkspaceSwitcher;
use crate::domain::Platform;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::FileConfigStore;
use crate::infra::fs::OsFs;
use crate::infra::git::GitStatusChecker;
use crate::infra::launcher::SystemLauncher;
use crate::infra::log_file::FileLogSink;
use crate::infra::process::SystemProcessTerminator;
use crate::output::OutputContext;

/// The switcher wired to the real operating system.
pub type SystemSwitcher = WorkspaceSwitcher<
    SystemProcessTerminator<TokioCommandRunner>,
    GitStatusChecker<TokioCommandRunner>,
    SystemLauncher<TokioCommandRunner>,
    OsFs,
>;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Where things live and which tools to use.
pub struct EnvironmentFlags {
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
    /// Append the switch log to this file as well.
    pub log_file: Option<PathBuf>,
    /// Editor command.
    pub editor: String,
    /// Timeout for each external command.
    pub timeout: Option<Duration>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub output: OutputFlags,
    pub environment: EnvironmentFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Workspace definitions file.
    pub config_store: FileConfigStore,
    /// Optional secondary log sink.
    pub file_sink: Option<FileLogSink>,
    /// Orchestrator bound to this platform's tools.
    pub switcher: SystemSwitcher,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// A log file that cannot be opened is reported and skipped.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let AppFlags {
            output,
            environment,
        } = flags;
        let mode = if output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let output = OutputContext::new(output.no_color, output.quiet);

        let file_sink = environment.log_file.as_deref().and_then(|path| {
            FileLogSink::open(path)
                .inspect_err(|e| output.warn(&format!("Log file disabled: {e:#}")))
                .ok()
        });

        let runner = TokioCommandRunner::new(environment.timeout);
        let platform = Platform::current();
        tracing::debug!(?platform, "platform detected");
        let switcher = WorkspaceSwitcher::new(
            SystemProcessTerminator::new(runner, platform),
            GitStatusChecker::new(runner),
            SystemLauncher::new(runner, platform, environment.editor),
            OsFs,
        );

        Self {
            output,
            mode,
            config_store: FileConfigStore::new(environment.config),
            file_sink,
            switcher,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }
}
