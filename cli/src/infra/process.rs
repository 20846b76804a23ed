//! Process termination: implements `ProcessTerminator` over a
//! `CommandRunner`, using the platform's own tools.

use crate::application::ports::{CommandRunner, PortOutcome, ProcessTerminator};
use crate::domain::process::{
    self, CommandLine, Platform, collect_descendants, parse_lsof_owners, parse_netstat_owners,
    parse_process_table,
};

/// Production `ProcessTerminator`. The platform is fixed at construction.
pub struct SystemProcessTerminator<R> {
    runner: R,
    platform: Platform,
}

impl<R: CommandRunner> SystemProcessTerminator<R> {
    #[must_use]
    pub fn new(runner: R, platform: Platform) -> Self {
        Self { runner, platform }
    }

    /// Run `cmd`, discarding the result. Kill commands fail for reasons that
    /// are all "nothing to do" here: no match, already exited, not permitted.
    async fn run_quietly(&self, cmd: &CommandLine) {
        match self.runner.status(&cmd.program, &cmd.arg_refs()).await {
            Ok(status) if !status.success() => {
                tracing::debug!(%cmd, %status, "command reported failure");
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(%cmd, error = %e, "command could not run"),
        }
    }

    async fn port_owners(&self, port: u16) -> Vec<u32> {
        let query = process::port_owner_query(self.platform, port);
        let out = match self.runner.run(&query.program, &query.arg_refs()).await {
            Ok(out) => out,
            Err(e) => {
                tracing::debug!(port, error = %e, "port owner lookup failed");
                return Vec::new();
            }
        };
        // lsof exits 1 when nothing matches.
        if !out.status.success() {
            return Vec::new();
        }
        let stdout = String::from_utf8_lossy(&out.stdout);
        match self.platform {
            Platform::Windows => parse_netstat_owners(&stdout, port),
            Platform::MacOs | Platform::Unix => parse_lsof_owners(&stdout),
        }
    }

    async fn descendants(&self, pid: u32) -> Vec<u32> {
        let Some(query) = process::process_table_query(self.platform) else {
            return Vec::new();
        };
        match self.runner.run(&query.program, &query.arg_refs()).await {
            Ok(out) if out.status.success() => {
                let table = parse_process_table(&String::from_utf8_lossy(&out.stdout));
                collect_descendants(&table, pid)
            }
            Ok(_) | Err(_) => {
                tracing::debug!(pid, "process table unavailable, killing owner only");
                Vec::new()
            }
        }
    }

    async fn kill_tree(&self, pid: u32) {
        let descendants = self.descendants(pid).await;
        let cmd = process::kill_tree_command(self.platform, pid, &descendants);
        self.run_quietly(&cmd).await;
    }
}

impl<R: CommandRunner> ProcessTerminator for SystemProcessTerminator<R> {
    async fn kill_by_name(&self, name: &str) {
        let cmd = process::kill_by_name_command(self.platform, name);
        self.run_quietly(&cmd).await;
    }

    async fn kill_by_port(&self, port: u16) -> PortOutcome {
        let pids = self.port_owners(port).await;
        if pids.is_empty() {
            return PortOutcome::AlreadyFree;
        }
        tracing::debug!(port, ?pids, "terminating port owners");
        for &pid in &pids {
            self.kill_tree(pid).await;
        }
        PortOutcome::Freed { pids }
    }
}
