//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `update`: Sync a language catalog with the `TR`/`TR_CTX` keys in the source file
//! - `init`: Write a default `.trsyncrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::language::Language;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Update(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Path overrides and output options.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source file to scan (overrides config file)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory holding lng_<language>.json files (overrides config file)
    #[arg(long)]
    pub catalog_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Target language code, e.g. fr, de, zh-Hans
    pub language: Language,

    /// Drop catalog entries that the source no longer references
    #[arg(long)]
    pub remove_unused: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add new keys from the source file to lng_<language>.json and report its status
    Update(UpdateCommand),
    /// Initialize a new .trsyncrc.json configuration file
    Init,
}
