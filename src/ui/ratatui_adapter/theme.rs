//! Color theme definitions for the ratatui picker

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the prompt label
    pub prompt: Color,
    /// Color for key names in the hint bar
    pub key: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            prompt: Color::Cyan,
            key: Color::Cyan,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted candidate
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style for other candidates
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the prompt label
    #[must_use]
    pub fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.prompt)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key names in the hint bar
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.key)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for the "No matches found" row
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        self.dimmed_style().add_modifier(Modifier::ITALIC)
    }
}
