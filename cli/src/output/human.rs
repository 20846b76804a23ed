//! Human-readable terminal renderer.

use crate::domain::config::{WorkspaceConfig, WorkspaceEntry};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render one line per workspace.
    pub fn render_workspaces(&self, config: &WorkspaceConfig) {
        if config.workspaces.is_empty() {
            self.ctx.info("No workspaces configured.");
            return;
        }
        self.ctx.header("Workspaces:");
        for (name, entry) in &config.workspaces {
            self.ctx.kv(&format!("{name:<16}"), &summarize(entry));
        }
    }
}

/// `"<path> · ports 5173, 8080 · 1 url · 3 apps"`, skipping empty parts.
#[must_use]
pub fn summarize(entry: &WorkspaceEntry) -> String {
    let mut parts = Vec::new();
    if !entry.path.as_os_str().is_empty() {
        parts.push(entry.path.display().to_string());
    }
    if !entry.ports.is_empty() {
        let ports = entry
            .ports
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("ports {ports}"));
    }
    if !entry.urls.is_empty() {
        parts.push(plural(entry.urls.len(), "url"));
    }
    if !entry.apps_to_close.is_empty() {
        parts.push(plural(entry.apps_to_close.len(), "app"));
    }
    if parts.is_empty() {
        return "(empty)".to_string();
    }
    parts.join(" · ")
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
