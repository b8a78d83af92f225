//! Configuration System
//!
//! Settings for the confq tool itself: where the project file lives, how results
//! are printed, and how logging behaves. The project file is a separate thing
//! (see [`crate::snapshot`]). Settings are layered: built-in defaults, the global
//! file, workspace files, `CONFQ_*` environment variables, then CLI flags.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::workspace_file::workspace_config_dir;

/// Accepted values for `output.format`
pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "table"];

/// Root settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfqConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the project configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Relative paths resolve against the workspace root
    #[serde(default = "default_project_file")]
    pub file: PathBuf,
}

fn default_project_file() -> PathBuf {
    PathBuf::from("confq.json")
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            file: default_project_file(),
        }
    }
}

impl ProjectConfig {
    pub fn resolve_path(&self, workspace_root: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            workspace_root.join(&self.file)
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.file.as_os_str().is_empty() {
            return Err("Project file path cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// text, json or table
    #[serde(default = "default_output_format")]
    pub format: String,
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if OUTPUT_FORMATS.contains(&self.format.as_str()) {
            Ok(())
        } else {
            Err(format!(
                "Invalid output format '{}' (must be one of {})",
                self.format,
                OUTPUT_FORMATS.join(", ")
            ))
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Project(String),
    Output(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Project(msg) => write!(f, "Project: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ConfqConfig {
    /// Validate every section, collecting all problems
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.project.validate() {
            errors.push(ValidationError::Project(e));
        }
        if let Err(e) = self.output.validate() {
            errors.push(ValidationError::Output(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
