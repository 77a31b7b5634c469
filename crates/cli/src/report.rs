use std::process::ExitCode;
use tracing::error;
use triage_core::TriageError;

pub const GENERIC_FAILURE: &str = "internal error while processing the request";

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Maps a failed command to a message and exit code.
///
/// Validation errors are shown verbatim; anything else is logged and
/// replaced by a generic message.
pub fn classify_failure(err: &anyhow::Error) -> (String, u8) {
    match err.downcast_ref::<TriageError>() {
        Some(e) if e.is_validation() => (e.to_string(), EXIT_INVALID_INPUT),
        _ => {
            error!(error = ?err, "command failed");
            (GENERIC_FAILURE.to_string(), EXIT_FAILURE)
        }
    }
}

pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    let (message, code) = classify_failure(err);
    eprintln!("error: {message}");
    ExitCode::from(code)
}
