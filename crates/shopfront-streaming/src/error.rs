//! Streaming error types.

use thiserror::Error;

/// Errors raised while streaming a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Shell already sent")]
    ShellAlreadySent,

    #[error("Sink already completed")]
    Completed,

    #[error("Streaming error: {0}")]
    Stream(String),

    #[error("Section '{0}' failed: {1}")]
    SectionFailed(String, String),
}
