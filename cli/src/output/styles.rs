//! Per-level console styling on top of an owo-colors `Style` sheet.

use std::fmt::Display;

use owo_colors::{OwoColorize as _, Style};

use crate::domain::LogLevel;

/// Colors for each switch-log level plus dimmed secondary text.
///
/// `Default` is the plain sheet (every style a no-op) used when colors are
/// off; `colorize` fills it in.
#[derive(Default, Clone)]
pub struct Styles {
    pub header: Style,
    pub step: Style,
    pub success: Style,
    pub info: Style,
    pub warn: Style,
    pub error: Style,
    pub dim: Style,
}

impl Styles {
    /// Switch every style to its terminal color.
    pub fn colorize(&mut self) {
        *self = Self {
            header: Style::new().bold().cyan(),
            step: Style::new().cyan(),
            success: Style::new().green(),
            info: Style::new().blue(),
            warn: Style::new().yellow(),
            error: Style::new().red(),
            dim: Style::new().dimmed(),
        };
    }

    #[must_use]
    pub fn for_level(&self, level: LogLevel) -> Style {
        match level {
            LogLevel::Header => self.header,
            LogLevel::Step => self.step,
            LogLevel::Success => self.success,
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
        }
    }

    /// `"  <marker> <msg>"` for a log line, or the styled message itself for
    /// headers, which carry no marker.
    #[must_use]
    pub fn render(&self, level: LogLevel, msg: &str) -> String {
        let style = self.for_level(level);
        match marker(level) {
            Some(mark) => format!("  {} {msg}", mark.style(style)),
            None => format!("  {}", msg.style(style)),
        }
    }

    /// `key` dimmed, then `value`.
    #[must_use]
    pub fn key_value(&self, key: &str, value: impl Display) -> String {
        format!("  {}  {value}", key.style(self.dim))
    }
}

fn marker(level: LogLevel) -> Option<&'static str> {
    match level {
        LogLevel::Header => None,
        LogLevel::Step => Some("→"),
        LogLevel::Success => Some("✓"),
        LogLevel::Info => Some("ℹ"),
        LogLevel::Warn => Some("⚠"),
        LogLevel::Error => Some("✗"),
    }
}
