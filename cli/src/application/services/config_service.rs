//! Application service: configuration use-cases.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::WorkspaceConfig;

/// Where the configuration came from on this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file.
    Loaded,
    /// No file existed; the sample was written and is in use.
    Created,
}

/// Load and validate the configuration, writing the sample on first run.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, written, or fails
/// the presence checks.
pub fn load_or_init(store: &impl ConfigStore) -> Result<(WorkspaceConfig, ConfigSource)> {
    let (config, source) = match store.load()? {
        Some(config) => (config, ConfigSource::Loaded),
        None => {
            store.save(&WorkspaceConfig::sample())?;
            // Reload so the sample gets the same path expansion as a stored file.
            let sample = store
                .load()?
                .context("sample configuration missing right after writing it")?;
            (sample, ConfigSource::Created)
        }
    };
    config.validate()?;
    Ok((config, source))
}

/// Write the sample configuration.
///
/// Returns `false` without touching the file when one already exists and
/// `force` is not set.
///
/// # Errors
///
/// Returns an error if the existing file cannot be read or parsed (pass
/// `force` to overwrite it), or if the sample cannot be written.
pub fn init_config(store: &impl ConfigStore, force: bool) -> Result<bool> {
    if !force && store.load()?.is_some() {
        return Ok(false);
    }
    store.save(&WorkspaceConfig::sample())?;
    Ok(true)
}
