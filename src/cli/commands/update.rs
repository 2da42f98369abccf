//! `update`: scan the source file, merge with the saved catalog, save, report.
//!
//! Only a missing source file stops the run. Catalog read and write failures
//! are recorded in the summary and the run carries on with safe defaults.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};

use super::super::args::UpdateCommand;
use super::{CommandResult, CommandSummary, LoadOutcome, UpdateSummary, WriteOutcome};
use crate::{
    config::load_config,
    core::{
        LoadedCatalog, Metadata, catalog_path, load_catalog, merge_catalogs, save_catalog,
        scan_source,
    },
    language::Language,
};

/// Everything the update pipeline needs, with config and CLI overrides applied.
#[derive(Debug, Clone)]
pub struct UpdatePlan {
    pub language: Language,
    pub source_path: PathBuf,
    pub catalog_path: PathBuf,
    pub remove_unused: bool,
    pub base_language: String,
    pub author: String,
    /// Creation date used if the catalog's metadata has to be synthesized.
    pub today: NaiveDate,
}

impl UpdatePlan {
    pub fn from_command(cmd: &UpdateCommand, cwd: &Path) -> Result<Self> {
        let loaded = load_config(cwd)?;
        let source_path = match &cmd.common.source {
            Some(path) => cwd.join(path),
            None => loaded.source_path(),
        };
        let catalog_dir = match &cmd.common.catalog_dir {
            Some(path) => cwd.join(path),
            None => loaded.catalog_dir(),
        };

        Ok(Self {
            language: cmd.language,
            source_path,
            catalog_path: catalog_path(&catalog_dir, cmd.language.code()),
            remove_unused: cmd.remove_unused,
            base_language: loaded.config.base_language,
            author: loaded.config.author,
            today: Local::now().date_naive(),
        })
    }
}

pub fn update(cmd: &UpdateCommand, cwd: &Path) -> Result<CommandResult> {
    let plan = UpdatePlan::from_command(cmd, cwd)?;
    run_update(&plan)
}

pub fn run_update(plan: &UpdatePlan) -> Result<CommandResult> {
    let scanned = scan_source(&plan.source_path)?;

    let loaded = load_catalog(&plan.catalog_path);
    let (LoadedCatalog { catalog: saved, metadata }, load) = match loaded {
        Ok(loaded) => {
            let entries = loaded.catalog.len();
            (loaded, LoadOutcome::Loaded { entries })
        }
        Err(err) if err.is_not_found() => (LoadedCatalog::default(), LoadOutcome::Missing),
        Err(err) => (LoadedCatalog::default(), LoadOutcome::Failed(err)),
    };

    let merged = merge_catalogs(&scanned, &saved, plan.remove_unused);

    let metadata = metadata.unwrap_or_else(|| {
        Metadata::synthesize(
            &plan.base_language,
            plan.language.code(),
            &plan.author,
            plan.today,
        )
    });
    let write = match save_catalog(&plan.catalog_path, &merged, &metadata) {
        Ok(()) => WriteOutcome::Written,
        Err(err) => WriteOutcome::Failed(err),
    };

    let warning_count = usize::from(matches!(load, LoadOutcome::Failed(_)))
        + usize::from(matches!(write, WriteOutcome::Failed(_)));

    Ok(CommandResult {
        summary: CommandSummary::Update(UpdateSummary {
            language: plan.language,
            catalog_path: plan.catalog_path.clone(),
            catalog: merged,
            load,
            write,
            removed_unused: plan.remove_unused,
        }),
        warning_count,
        failed: false,
    })
}
