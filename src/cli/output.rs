//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ConfqError, SnapshotError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ConfqError) -> String {
    match e {
        ConfqError::Snapshot(SnapshotError::NotFound(path)) => format!(
            "Project configuration not found: {}. Pass --project or set project.file in settings.",
            path.display()
        ),
        other => other.to_string(),
    }
}
