//! Output formatting module

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use std::io::Write;

use console::Term;

use crate::domain::LogLevel;
pub use human::HumanRenderer;
pub use reporter::TerminalLogSink;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
///
/// Every write ignores I/O errors: a closed pipe or detached terminal must
/// not abort a switch halfway through.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Write one line to stdout unless `quiet`.
    pub fn line(&self, text: &str) {
        if !self.quiet {
            let _ = writeln!(std::io::stdout().lock(), "{text}");
        }
    }

    /// Write one line to stdout even when `quiet`. For requested data
    /// (JSON documents, paths), not chatter.
    pub fn line_always(&self, text: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{text}");
    }

    /// Print a switch-log line in its level's style. `Error` goes to
    /// stderr and is never suppressed; everything else obeys `quiet`.
    pub fn level(&self, level: LogLevel, msg: &str) {
        let text = self.styles.render(level, msg);
        if level == LogLevel::Error {
            let _ = writeln!(std::io::stderr().lock(), "{text}");
        } else {
            self.line(&text);
        }
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) {
        self.level(LogLevel::Success, msg);
    }

    /// `⚠ msg`
    pub fn warn(&self, msg: &str) {
        self.level(LogLevel::Warn, msg);
    }

    /// `ℹ msg`
    pub fn info(&self, msg: &str) {
        self.level(LogLevel::Info, msg);
    }

    pub fn header(&self, msg: &str) {
        self.level(LogLevel::Header, msg);
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        self.line(&self.styles.key_value(key, value));
    }
}
