//! Snapshot providers: the port the CLI uses to obtain a configuration snapshot.

use super::ConfigurationSnapshot;
use crate::error::SnapshotError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of configuration snapshots.
///
/// Implementations only read; the returned snapshot is owned by the caller.
pub trait SnapshotProvider: Send + Sync {
    /// Load a fresh snapshot
    fn load(&self) -> Result<ConfigurationSnapshot, SnapshotError>;

    /// Human-readable origin, used in log events
    fn describe(&self) -> String;
}

/// Loads a snapshot from a project file on disk (`.json` or `.toml`)
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<ConfigurationSnapshot, SnapshotError> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => serde_json::from_str(content).map_err(|e| SnapshotError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }),
            Some("toml") => toml::from_str(content).map_err(|e| SnapshotError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }),
            _ => Err(SnapshotError::UnsupportedFormat(self.path.clone())),
        }
    }
}

impl SnapshotProvider for FileSnapshotProvider {
    fn load(&self) -> Result<ConfigurationSnapshot, SnapshotError> {
        if !self.path.exists() {
            return Err(SnapshotError::NotFound(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let snapshot = self.parse(&content)?;
        debug!(
            path = %self.path().display(),
            resources = snapshot.resource_count(),
            "Loaded configuration snapshot"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

/// Hands out clones of a snapshot built in memory
pub struct InMemorySnapshotProvider {
    snapshot: ConfigurationSnapshot,
}

impl InMemorySnapshotProvider {
    pub fn new(snapshot: ConfigurationSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotProvider for InMemorySnapshotProvider {
    fn load(&self) -> Result<ConfigurationSnapshot, SnapshotError> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
