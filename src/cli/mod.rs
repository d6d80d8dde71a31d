//! Command-line interface layer.

use std::env;

use anyhow::{Context, Result};

pub mod args;
pub mod commands;
mod exit_code;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, ExtractArgs};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let result = run::run(args, &cwd)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}
