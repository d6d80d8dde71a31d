use std::path::PathBuf;

use crate::core::UnitMetadata;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// A unit that was extracted successfully.
#[derive(Debug)]
pub struct UnitSummary {
    /// Path relative to the working directory.
    pub file_path: String,
    pub metadata: UnitMetadata,
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Successful units, in path order.
    pub units: Vec<UnitSummary>,
    /// Print unit metadata as JSON instead of the human summary.
    pub json: bool,
    /// Entries the scanner could not read.
    pub skipped_count: usize,
}

impl ExtractSummary {
    pub fn message_count(&self) -> usize {
        self.units.iter().map(|u| u.metadata.messages.len()).sum()
    }

    pub fn catalog_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.catalog_path.is_some())
            .count()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of compilation units processed, failed ones included.
    pub source_files_checked: usize,
}
