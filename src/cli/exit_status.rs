use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, including non-fatal no-ops
/// - `Failure` (1): The build step reported an error-level diagnostic
/// - `Error` (2): Command failed due to an internal error (config parse
///   error, compiler failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
