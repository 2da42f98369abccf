use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, update::update},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` describing what the command did, including degraded steps
/// - `Err` if the command could not run at all (source file missing, bad config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    match command {
        Some(Command::Update(cmd)) => update(&cmd, &cwd),
        Some(Command::Init) => init(&cwd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
