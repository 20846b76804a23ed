//! JSON output helpers.
//!
//! `--json` runs buffer the switch log and print one document at the end,
//! so stdout always holds exactly one parseable value.

use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::LogSink;
use crate::application::services::workspace_switch::{SwitchOutcome, SwitchReport};
use crate::domain::LogEntry;

/// Collects entries in memory.
#[derive(Default)]
pub struct BufferedLogSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl BufferedLogSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything collected so far.
    #[must_use]
    pub fn drain(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }
}

impl LogSink for BufferedLogSink {
    fn emit(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}

#[derive(Serialize)]
struct SwitchDocument<'a> {
    workspace: &'a str,
    status: &'static str,
    log: &'a [LogEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a SwitchReport>,
}

/// Render a finished switch as a single JSON document.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_switch(name: &str, outcome: &SwitchOutcome, log: &[LogEntry]) -> Result<String> {
    let (status, report) = match outcome {
        SwitchOutcome::NotFound => ("not_found", None),
        SwitchOutcome::Completed(report) => ("completed", Some(report)),
    };
    let doc = SwitchDocument {
        workspace: name,
        status,
        log,
        report,
    };
    serde_json::to_string_pretty(&doc).context("JSON serialization failed")
}
