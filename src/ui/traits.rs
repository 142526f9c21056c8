//! Core traits for UI abstraction layer

use super::error::Result;

/// Trait for single-choice pickers
///
/// Abstracts away the interactive backend so the install workflow can be
/// driven by a scripted picker in tests.
pub trait Picker {
    /// Let the user choose one of `items`
    ///
    /// Returns `Ok(None)` when the user cancelled. Cancelling is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoCandidates`](super::UiError::NoCandidates) for an
    /// empty list and [`UiError::TerminalUnavailable`](super::UiError::TerminalUnavailable)
    /// when no interactive terminal can be acquired.
    fn pick(&self, items: &[String]) -> Result<Option<String>>;
}
