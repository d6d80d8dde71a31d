use std::path::Path;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};

/// Dispatch a parsed command, running it relative to `cwd`.
pub fn run(Arguments { command }: Arguments, cwd: &Path) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(args)) => extract(&args, cwd),
        Some(Command::Init) => init(cwd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
