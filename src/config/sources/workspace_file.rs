//! Workspace settings: .confq/config.toml and .confq/{CONFQ_ENV}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Directory holding workspace-level settings.
pub fn workspace_config_dir(workspace_root: &Path) -> PathBuf {
    workspace_root.join(".confq")
}

/// Add workspace settings files to builder.
/// Precedence: .confq/config.toml (base) then .confq/{CONFQ_ENV}.toml when CONFQ_ENV is set.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_dir = workspace_config_dir(workspace_root);
    let mut builder = builder;

    let base_config_path = config_dir.join("config.toml");
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    if let Ok(env_name) = std::env::var("CONFQ_ENV") {
        let env_config_path = config_dir.join(format!("{}.toml", env_name));
        if env_config_path.exists() {
            builder = builder.add_source(File::from(env_config_path.as_path()).required(false));
        }
    }

    Ok(builder)
}
