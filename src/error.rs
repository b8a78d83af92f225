//! Error types for confq.
//!
//! The resource resolver never fails: not-found and invalid-kind are ordinary
//! outcomes. Errors here cover the surrounding plumbing only (snapshot loading,
//! tool settings, logging setup, output encoding).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing a configuration snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Project configuration not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse project configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported project configuration format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for the CLI and library entry points
#[derive(Debug, Error)]
pub enum ConfqError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Presentation error: {0}")]
    Presentation(String),
}

impl From<config::ConfigError> for ConfqError {
    fn from(err: config::ConfigError) -> Self {
        ConfqError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfqError {
    fn from(err: serde_json::Error) -> Self {
        ConfqError::Presentation(err.to_string())
    }
}
