//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-line prompt showing the current query
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Prompt text
    prompt: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            prompt,
            theme,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.prompt, self.theme.prompt_style()),
            Span::raw(" "),
            Span::raw(self.query),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
