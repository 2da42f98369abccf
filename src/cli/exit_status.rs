use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): Command finished. Degraded catalog reads/writes still count as success.
/// - `Failure` (1): Command refused to do its work (e.g. `init` over an existing config).
/// - `Error` (2): Command aborted (missing source file, bad config, bad arguments).
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
