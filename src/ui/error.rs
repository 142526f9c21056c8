//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The display surface could not be acquired (not a TTY, raw mode refused)
    #[error("Interactive terminal unavailable: {0}")]
    TerminalUnavailable(String),

    /// The picker was started without anything to pick from
    #[error("No candidates to choose from")]
    NoCandidates,

    /// IO error while drawing or reading input
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<std::convert::Infallible> for UiError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
