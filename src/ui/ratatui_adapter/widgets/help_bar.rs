//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key name (e.g., "Enter")
    pub key: String,
    /// Action description (e.g., "select")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget: key hints on the left, match count on the right
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Number of candidates matching the query
    matched: usize,
    /// Number of candidates overall
    total: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], matched: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            hints,
            matched,
            total,
            theme,
        }
    }

    /// Get default hints for the picker
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("Enter", "select"),
            KeyHint::new("ESC", "cancel"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.key_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        spans.push(Span::styled(
            format!("  {}/{}", self.matched, self.total),
            self.theme.dimmed_style(),
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
