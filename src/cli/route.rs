//! CLI route: single route table and run context. Dispatches to the snapshot
//! provider, the resolver and presentation.

use crate::config::{ConfigLoader, ConfqConfig, OUTPUT_FORMATS};
use crate::error::ConfqError;
use crate::query::{resolve, QueryOutcome, ResourceKind};
use crate::snapshot::{ConfigurationSnapshot, FileSnapshotProvider, SnapshotProvider};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::{Commands, ConfigCommands};
use crate::cli::presentation::{
    format_outcome_json, format_outcome_table, format_outcome_text, format_settings,
};

/// Runtime context for CLI execution: effective settings and the snapshot provider.
pub struct RunContext {
    config: ConfqConfig,
    provider: Box<dyn SnapshotProvider>,
}

impl RunContext {
    /// Create run context from workspace root, optional settings file and optional project file.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        project_path: Option<PathBuf>,
    ) -> Result<Self, ConfqError> {
        let mut config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        if let Some(project) = project_path {
            config.project.file = project;
        }

        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ConfqError::ConfigError(format!(
                "Settings validation failed:\n{}",
                messages.join("\n")
            ))
        })?;

        let project_file = config.project.resolve_path(&workspace_root);
        debug!(project = %project_file.display(), "Resolved project configuration path");
        let provider = Box::new(FileSnapshotProvider::new(project_file));
        Ok(Self::with_provider(config, provider))
    }

    /// Build a context around an explicit provider (in-memory snapshots, embedding).
    pub fn with_provider(config: ConfqConfig, provider: Box<dyn SnapshotProvider>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &ConfqConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ConfqError> {
        let name = command_name(command);
        info!(command = %name, "Executing command");
        let result = self.execute_inner(command);
        if let Err(ref e) = result {
            debug!(command = %name, error = %e, "Command failed");
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ConfqError> {
        match command {
            Commands::Config { command } => self.handle_config_command(command),
            Commands::Settings { format } => format_settings(&self.config, format),
        }
    }

    fn handle_config_command(&self, command: &ConfigCommands) -> Result<String, ConfqError> {
        match command {
            ConfigCommands::View { kind, name, format } => {
                let format = format
                    .as_deref()
                    .unwrap_or(self.config.output.format.as_str());
                if !OUTPUT_FORMATS.contains(&format) {
                    return Err(ConfqError::ConfigError(format!(
                        "Invalid output format: {} (must be one of {})",
                        format,
                        OUTPUT_FORMATS.join(", ")
                    )));
                }
                self.view(kind.as_deref(), name.as_deref(), format)
            }
        }
    }

    fn view(
        &self,
        kind: Option<&str>,
        name: Option<&str>,
        format: &str,
    ) -> Result<String, ConfqError> {
        // Usage and invalid-kind answers never depend on the project file.
        let needs_snapshot = kind.is_some_and(|k| k.parse::<ResourceKind>().is_ok());
        let snapshot = if needs_snapshot {
            debug!(source = %self.provider.describe(), "Loading configuration snapshot");
            self.provider.load()?
        } else {
            ConfigurationSnapshot::default()
        };

        let outcome = resolve(kind, name, &snapshot);
        info!(outcome = outcome.tag(), "Resolved resource query");
        present(&outcome, &snapshot, format)
    }
}

fn present(
    outcome: &QueryOutcome,
    snapshot: &ConfigurationSnapshot,
    format: &str,
) -> Result<String, ConfqError> {
    match format {
        "json" => format_outcome_json(outcome),
        "table" => Ok(format_outcome_table(outcome, snapshot)),
        _ => Ok(format_outcome_text(outcome)),
    }
}
