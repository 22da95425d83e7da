use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; advisory findings do not fail the run
/// - `Failure` (1): A file could not be read or written, or a repair was aborted
/// - `Error` (2): Command failed due to internal error (config error, no reference, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Some files failed to read/write or could not be repaired.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    /// `Failure` when `failed` is true, `Success` otherwise.
    pub fn from_failures(failed: bool) -> Self {
        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
