//! Diagnostic logging with `tracing`, written to stderr.
//!
//! This is the developer-facing trace of commands run and errors swallowed.
//! The user-facing switch log goes through `LogSink`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SWITCHBLADE_LOG";

/// Initialize the global subscriber.
///
/// `SWITCHBLADE_LOG` wins when set; otherwise `verbose` selects `debug`
/// over the default `warn`. A second call is a no-op.
pub fn init(verbose: bool) {
    let default = if verbose { "switchblade_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .with(filter)
        .try_init();
}
