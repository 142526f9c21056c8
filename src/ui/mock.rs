//! Mock picker for testing

use super::error::{Result, UiError};
use super::traits::Picker;

/// Mock picker that returns a predetermined selection
///
/// Useful for testing without requiring user interaction
#[derive(Debug, Clone, Default)]
pub struct MockPicker {
    /// Item to return; matched against the offered candidates
    pub predetermined_selection: Option<String>,
}

impl MockPicker {
    /// Create a mock picker that selects `selection`
    #[must_use]
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            predetermined_selection: Some(selection.into()),
        }
    }

    /// Create a mock picker that simulates user cancellation
    #[must_use]
    pub const fn cancelled() -> Self {
        Self {
            predetermined_selection: None,
        }
    }
}

impl Picker for MockPicker {
    fn pick(&self, items: &[String]) -> Result<Option<String>> {
        if items.is_empty() {
            return Err(UiError::NoCandidates);
        }

        Ok(self
            .predetermined_selection
            .as_ref()
            .filter(|wanted| items.contains(wanted))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        vec!["Go.gitignore".to_string(), "Rust.gitignore".to_string()]
    }

    #[test]
    fn test_mock_picker_with_selection() {
        let picker = MockPicker::new("Rust.gitignore");
        let result = picker.pick(&items()).unwrap();

        assert_eq!(result.as_deref(), Some("Rust.gitignore"));
    }

    #[test]
    fn test_mock_picker_cancelled() {
        let picker = MockPicker::cancelled();
        assert!(picker.pick(&items()).unwrap().is_none());
    }

    #[test]
    fn test_mock_picker_unknown_selection() {
        let picker = MockPicker::new("Zig.gitignore");
        assert!(picker.pick(&items()).unwrap().is_none());
    }

    #[test]
    fn test_mock_picker_no_candidates() {
        let picker = MockPicker::new("Go.gitignore");
        assert!(matches!(picker.pick(&[]), Err(UiError::NoCandidates)));
    }
}
