use std::process::ExitCode;

/// Process exit status, linter-style: catalog problems and internal
/// failures exit differently so scripts can tell them apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Ran to completion without finding errors (0).
    Success,
    /// Ran to completion but found errors in the catalogs (1).
    Failure,
    /// Could not run: bad arguments, unreadable config, missing catalog (2).
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
