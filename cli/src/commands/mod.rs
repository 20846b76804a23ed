//! Command implementations

pub mod config;
pub mod init;
pub mod list;
pub mod session;
pub mod switch;
pub mod version;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service::{self, ConfigSource};
use crate::domain::WorkspaceConfig;

/// Load the workspace definitions, announcing a freshly written sample.
fn load_config(app: &AppContext) -> Result<WorkspaceConfig> {
    let (config, source) = config_service::load_or_init(&app.config_store)?;
    if source == ConfigSource::Created && !app.is_json() {
        app.output.info(&format!(
            "Created sample configuration at {}",
            app.config_store.path()?.display()
        ));
    }
    Ok(config)
}
