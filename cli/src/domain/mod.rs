//! Domain layer: pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod log;
pub mod process;
pub mod workspace;

pub use config::{WorkspaceConfig, WorkspaceEntry};
pub use error::{ConfigError, LaunchError, WorkspaceError};
pub use log::{LogEntry, LogLevel};
pub use process::{CommandLine, Platform};
pub use workspace::Workspace;
