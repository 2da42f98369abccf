use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into `dir`. An existing file is left alone.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let created = !config_path.exists();

    if created {
        fs::write(&config_path, format!("{}\n", default_config_json()?))
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created }),
        warning_count: 0,
        failed: !created,
    })
}
