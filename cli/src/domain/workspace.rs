//! Workspace record and name handling.
//!
//! Pure functions only. No I/O.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A named profile describing a project's path, ports, URLs and the
/// distracting applications to close before working on it.
///
/// Read-only for the duration of a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Display name, as written in the configuration.
    pub name: String,
    /// Project directory. May be empty or absent from disk.
    pub path: PathBuf,
    /// Dev-server ports to free, in check order. Duplicates are tolerated.
    pub ports: Vec<u16>,
    /// URLs to open, in open order.
    pub urls: Vec<String>,
    /// Process names to terminate, in kill order.
    pub apps_to_close: Vec<String>,
}

impl Workspace {
    /// Name in the uppercase form used by the start/completion markers.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Case-fold a workspace name for lookup.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Expand a leading `~` to `home`. Paths without one are returned unchanged,
/// as are `~` paths when the home directory is unknown.
#[must_use]
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
