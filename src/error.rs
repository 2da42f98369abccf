//! Error types for the sync pipeline.
//!
//! Only [`SyncError::SourceFileMissing`] is meant to end a run. Catalog errors
//! are caught by the update command and downgraded to a warning.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal errors that stop the `update` pipeline.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Source file not found: {}", path.display())]
    SourceFileMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read source file: {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures while loading or saving a `lng_<language>.json` catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read catalog: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse catalog: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize catalog for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write catalog: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// True when the catalog simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
