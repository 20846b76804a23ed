//! `TerminalLogSink`: Presentation-layer implementation of `LogSink`.
//!
//! Wraps `&OutputContext` so the switch service can stream its log without
//! depending on any presentation type directly.

use crate::application::ports::LogSink;
use crate::domain::LogEntry;
use crate::output::OutputContext;

/// Console log sink.
///
/// - `Header` → bold cyan line
/// - `Step` → `"  → {message}"`
/// - `Success` → `"  ✓ {message}"`
/// - `Info` → `"  ℹ {message}"`
/// - `Warn` → `"  ⚠ {message}"`
/// - `Error` → `"  ✗ {message}"` on stderr, even when quiet
pub struct TerminalLogSink<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalLogSink<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl LogSink for TerminalLogSink<'_> {
    fn emit(&self, entry: LogEntry) {
        self.ctx.level(entry.level, &entry.message);
    }
}
