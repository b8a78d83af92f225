//! CLI parse: clap types for confq. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// confq - query resources in a project configuration
#[derive(Parser)]
#[command(name = "confq")]
#[command(about = "Query accounts, networks, contracts, deployments and emulators in a project configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Settings file path (overrides default settings loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Project configuration file (overrides project.file from settings)
    #[arg(short = 'f', long)]
    pub project: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the project configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show effective confq settings
    Settings {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// View a list of resource entities in the configuration, or the properties of one entity
    #[command(after_help = "Examples:\n  confq config view account\n  confq config view account <accountname>\n  confq config view contract\n  confq config view contract <contractname>\n  confq config view deployment\n  confq config view deployment <networkname>\n  confq config view emulator\n  confq config view emulator <emulatorname>\n  confq config view network\n  confq config view network <networkname>")]
    View {
        /// Resource kind: account, network, contract, emulator, deployment
        kind: Option<String>,
        /// Resource name (network name for deployments)
        name: Option<String>,
        /// Output format (text, json or table); defaults to output.format from settings
        #[arg(long)]
        format: Option<String>,
    },
}
