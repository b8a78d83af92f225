//! Settings presentation: effective settings as toml or json.

use crate::config::ConfqConfig;
use crate::error::ConfqError;

pub fn format_settings(config: &ConfqConfig, format: &str) -> Result<String, ConfqError> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(config)?),
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfqError::Presentation(format!("Failed to render settings: {}", e))),
        other => Err(ConfqError::ConfigError(format!(
            "Invalid settings format: {} (must be 'toml' or 'json')",
            other
        ))),
    }
}
