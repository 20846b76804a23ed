//! Infrastructure implementation of the `ConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::WorkspaceConfig;

/// Environment variable overriding the configuration location.
pub const CONFIG_ENV: &str = "SWITCHBLADE_CONFIG";

/// Production `ConfigStore`: a JSON file, or YAML when the extension says so.
pub struct FileConfigStore {
    explicit: Option<PathBuf>,
}

impl FileConfigStore {
    /// Use `explicit` when given, else `$SWITCHBLADE_CONFIG`, else
    /// `~/.switchblade/config.json`.
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Option<WorkspaceConfig>> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let mut config: WorkspaceConfig = if is_yaml(&path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        };
        config.expand_paths(dirs::home_dir().as_deref());
        tracing::debug!(path = %path.display(), workspaces = config.workspaces.len(), "config loaded");
        Ok(Some(config))
    }

    fn save(&self, config: &WorkspaceConfig) -> Result<()> {
        let path = self.path()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = if is_yaml(&path) {
            serde_yaml::to_string(config).context("cannot serialize config")?
        } else {
            serde_json::to_string_pretty(config).context("cannot serialize config")? + "\n"
        };
        std::fs::write(&path, content)
            .with_context(|| format!("cannot write {}", path.display()))?;
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".switchblade").join("config.json"))
    }
}
