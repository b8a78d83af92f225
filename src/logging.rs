//! Logging System
//!
//! Structured logging via `tracing`. Query results are written to stdout, so
//! log events only ever go to stderr or a log file.

use crate::error::ConfqError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];
pub const LOG_OUTPUTS: [&str; 3] = ["stderr", "file", "file+stderr"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch (`--quiet` turns it off)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path; resolved under the state directory when unset
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Check level, format and output against the accepted values
    pub fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level '{}' (must be one of {})",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }
        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(format!(
                "Invalid log format '{}' (must be 'json' or 'text')",
                self.format
            ));
        }
        parse_output_destinations(&self.output).map_err(|e| e.to_string())?;
        Ok(())
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (CONFQ_LOG, CONFQ_LOG_FORMAT, CONFQ_LOG_OUTPUT)
/// 2. The given config (already merged from CLI flags and settings files)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ConfqError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        return Ok(());
    }
    if let Some(config) = config {
        config.validate().map_err(ConfqError::LoggingError)?;
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if output.stderr {
        layers.push(make_layer(&format, use_color, std::io::stderr));
    }
    if output.file {
        let path = resolve_log_file_path(None, config.and_then(|c| c.file.clone()))?;
        let file = open_log_file(&path)?;
        layers.push(make_layer(&format, false, Mutex::new(file)));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| ConfqError::LoggingError(format!("Failed to install subscriber: {}", e)))
}

fn make_layer<W>(format: &str, ansi: bool, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if format == "json" {
        fmt::layer()
            .json()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed()
    }
}

fn open_log_file(path: &std::path::Path) -> Result<std::fs::File, ConfqError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfqError::LoggingError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ConfqError::LoggingError(format!("Failed to open log file {:?}: {}", path, e))
        })
}

/// Pick the log file: explicit flag, then configured path, then the platform state dir.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ConfqError> {
    if let Some(path) = cli_file.or(config_file) {
        return Ok(path);
    }
    let dirs = directories::ProjectDirs::from("", "", "confq").ok_or_else(|| {
        ConfqError::LoggingError("Could not determine a home directory for the log file".into())
    })?;
    let base = dirs
        .state_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| dirs.data_local_dir().to_path_buf());
    Ok(base.join("confq.log"))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ConfqError> {
    if let Ok(filter) = EnvFilter::try_from_env("CONFQ_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);
    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(directive.parse().map_err(|e| {
                ConfqError::LoggingError(format!("Invalid log directive: {}", e))
            })?);
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ConfqError> {
    if let Ok(format) = std::env::var("CONFQ_LOG_FORMAT") {
        if LOG_FORMATS.contains(&format.as_str()) {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfqError::LoggingError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(format.to_string())
}

/// Output destinations
#[derive(Debug, PartialEq, Eq)]
struct OutputDestinations {
    stderr: bool,
    file: bool,
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<OutputDestinations, ConfqError> {
    if let Ok(output) = std::env::var("CONFQ_LOG_OUTPUT") {
        return parse_output_destinations(&output);
    }
    parse_output_destinations(config.map(|c| c.output.as_str()).unwrap_or("stderr"))
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ConfqError> {
    match output {
        "stderr" => Ok(OutputDestinations {
            stderr: true,
            file: false,
        }),
        "file" => Ok(OutputDestinations {
            stderr: false,
            file: true,
        }),
        "file+stderr" => Ok(OutputDestinations {
            stderr: true,
            file: true,
        }),
        _ => Err(ConfqError::LoggingError(format!(
            "Invalid log output: {} (must be 'stderr', 'file', or 'file+stderr')",
            output
        ))),
    }
}
