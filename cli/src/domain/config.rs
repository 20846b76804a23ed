//! Domain types and validators for the workspace definitions file.
//!
//! Pure functions only. No I/O.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::workspace::{Workspace, expand_home, fold_name};

// ── Config schema ────────────────────────────────────────────────────────────

/// One workspace as stored on disk. The name is the map key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceEntry {
    pub path: PathBuf,
    pub ports: Vec<u16>,
    pub urls: Vec<String>,
    #[serde(alias = "appsToClose")]
    pub apps_to_close: Vec<String>,
}

/// Top-level configuration: workspace name → definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceConfig {
    pub workspaces: BTreeMap<String, WorkspaceEntry>,
}

impl WorkspaceConfig {
    /// Configuration written on first run so there is something to edit.
    #[must_use]
    pub fn sample() -> Self {
        let mut workspaces = BTreeMap::new();
        workspaces.insert(
            "aquamind".to_string(),
            WorkspaceEntry {
                path: PathBuf::from("~/projects/aquamind"),
                ports: vec![5173],
                urls: vec!["http://localhost:5173".to_string()],
                apps_to_close: vec![
                    "WhatsApp.Root".to_string(),
                    "Spotify".to_string(),
                    "Grammarly.Desktop".to_string(),
                ],
            },
        );
        workspaces.insert(
            "diagnosure".to_string(),
            WorkspaceEntry {
                path: PathBuf::from("~/projects/DiagnoSure-main"),
                ports: vec![5173],
                urls: vec!["http://localhost:5173".to_string()],
                apps_to_close: vec![
                    "WhatsApp".to_string(),
                    "Spotify".to_string(),
                    "Grammarly.Desktop".to_string(),
                ],
            },
        );
        Self { workspaces }
    }

    /// Presence checks: names are non-empty and unique ignoring case.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for name in self.workspaces.keys() {
            let folded = fold_name(name);
            if folded.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if let Some(first) = seen.insert(folded, name) {
                return Err(ConfigError::DuplicateName {
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Rewrite `~`-prefixed workspace paths against `home`.
    pub fn expand_paths(&mut self, home: Option<&Path>) {
        for entry in self.workspaces.values_mut() {
            entry.path = expand_home(&entry.path, home);
        }
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Workspace> {
        let wanted = fold_name(name);
        self.workspaces
            .iter()
            .find(|(key, _)| fold_name(key) == wanted)
            .map(|(key, entry)| Workspace {
                name: key.clone(),
                path: entry.path.clone(),
                ports: entry.ports.clone(),
                urls: entry.urls.clone(),
                apps_to_close: entry.apps_to_close.clone(),
            })
    }

    /// Workspace names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.workspaces.keys().cloned().collect()
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
