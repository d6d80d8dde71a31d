use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): No errors were reported
/// - `Failure` (1): At least one unit failed to extract
/// - `Error` (2): The run itself failed (bad config, unreadable working directory)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No errors; warnings may have been reported.
    Success,
    /// Extraction errors were reported.
    Failure,
    /// Internal failure.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
