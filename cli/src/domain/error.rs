//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Workspace errors ──────────────────────────────────────────────────────────

/// Errors related to resolving a workspace by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("Workspace '{0}' not found.")]
    NotFound(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Presence checks on the workspace definitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Workspace names must not be empty.")]
    EmptyName,

    #[error("Workspace names must be unique ignoring case: '{first}' and '{second}' collide.")]
    DuplicateName { first: String, second: String },
}

// ── Launch errors ─────────────────────────────────────────────────────────────

/// Failures of the editor or URL handler to start.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{program} could not be started: {reason}")]
    Spawn { program: String, reason: String },

    #[error("{program} exited with {status}")]
    Exit { program: String, status: String },
}
