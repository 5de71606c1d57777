//! JSON snapshot of the latest run.
//!
//! The snapshot is what readers are served between runs:
//!
//! ```text
//! { "issues": [ ...ProcessedIssue ], "lastUpdated": "2025-01-01T00:00:00Z" | null }
//! ```
//!
//! Writes go through a temporary file in the same directory and are renamed
//! into place, so readers never see a half-written file.

use crate::issues::ProcessedIssue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while writing the snapshot.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem error.
    #[error("Failed to write cache '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize cache: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Persisted result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSnapshot {
    pub issues: Vec<ProcessedIssue>,

    /// When the run completed; `None` if no run has completed yet.
    pub last_updated: Option<DateTime<Utc>>,
}

impl IssueSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(issues: Vec<ProcessedIssue>) -> Self {
        Self {
            issues,
            last_updated: Some(Utc::now()),
        }
    }

    /// Snapshot served before any run has completed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            issues: Vec::new(),
            last_updated: None,
        }
    }
}

/// Snapshot file at a fixed path.
#[derive(Debug, Clone)]
pub struct IssueCache {
    path: PathBuf,
}

impl IssueCache {
    /// Creates a cache backed by `path`. Nothing is touched until a load or store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the snapshot, or an empty one if the file is missing or unreadable.
    #[must_use]
    pub fn load(&self) -> IssueSnapshot {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    debug!(path = %self.path.display(), "No cache yet, serving empty snapshot");
                } else {
                    warn!(path = %self.path.display(), error = %e, "Failed to read cache");
                }
                return IssueSnapshot::empty();
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse cache");
                IssueSnapshot::empty()
            }
        }
    }

    /// Writes the snapshot as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the directory or file cannot be written.
    pub fn store(&self, snapshot: &IssueSnapshot) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let io_error = |source: std::io::Error| CacheError::IoError {
            path: self.path.display().to_string(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(io_error)?;

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(json.as_bytes()).map_err(io_error)?;
        file.persist(&self.path).map_err(|e| io_error(e.error))?;

        info!(
            path = %self.path.display(),
            count = snapshot.issues.len(),
            "Cached issues"
        );
        Ok(())
    }
}
