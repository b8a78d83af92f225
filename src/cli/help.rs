//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log events (e.g. "config.view", "settings").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
        Commands::Settings { .. } => "settings".to_string(),
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::View { .. } => "view",
    }
}
