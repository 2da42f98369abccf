use std::path::PathBuf;

use crate::{
    core::{Catalog, StatusCounts, key_statuses},
    error::CatalogError,
    language::Language,
};

/// What happened when the existing catalog was read.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { entries: usize },
    /// No catalog yet; a new one is started.
    Missing,
    /// The file exists but could not be used; treated as missing.
    Failed(CatalogError),
}

/// What happened when the merged catalog was written.
#[derive(Debug)]
pub enum WriteOutcome {
    Written,
    Failed(CatalogError),
}

#[derive(Debug)]
pub struct UpdateSummary {
    pub language: Language,
    pub catalog_path: PathBuf,
    /// Merged catalog, as written (or as it would have been written).
    pub catalog: Catalog,
    pub load: LoadOutcome,
    pub write: WriteOutcome,
    pub removed_unused: bool,
}

impl UpdateSummary {
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_statuses(&key_statuses(&self.catalog))
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Update(UpdateSummary),
    Init(InitSummary),
}

/// Result of running a trsync command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of steps that failed and were degraded instead of aborting.
    pub warning_count: usize,
    /// True when the command could not do what was asked (exit code 1).
    pub failed: bool,
}
