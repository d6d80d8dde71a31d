//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract message descriptors from the source tree
//! - `init`: Write a default `.intlrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Extract(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// Files or directories to extract (default: scan the source root)
    pub paths: Vec<PathBuf>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Write one catalog per unit under this directory (overrides config file)
    #[arg(long)]
    pub messages_dir: Option<PathBuf>,

    /// Module the components and helpers are imported from (overrides config file)
    #[arg(long)]
    pub module_source_name: Option<String>,

    /// Fail on messages without a `description`
    #[arg(long)]
    pub enforce_descriptions: bool,

    /// Record the file, line and column of every message
    #[arg(long)]
    pub extract_source_location: bool,

    /// Print the extracted messages of every unit as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract react-intl message descriptors from JSX/TSX sources
    Extract(ExtractArgs),
    /// Initialize a new .intlrc.json configuration file
    Init,
}
