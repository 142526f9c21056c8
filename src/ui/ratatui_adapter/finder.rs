//! Ratatui-based picker implementation
//!
//! Implements the `Picker` trait: one full redraw, one blocking key read and
//! one state update per iteration until the user confirms or cancels.

use super::events::{EventResult, KeySource, TerminalKeys, handle_key};
use super::state::PickerState;
use super::terminal::TerminalSession;
use super::theme::Theme;
use super::widgets::{HelpBar, ItemList, KeyHint, SearchBar};
use crate::ui::error::{Result, UiError};
use crate::ui::traits::Picker;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Layout},
};

/// Ratatui-based picker implementation
pub struct RatatuiPicker {
    prompt: String,
    theme: Theme,
}

impl RatatuiPicker {
    /// Create a new ratatui picker
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: "Search:".to_string(),
            theme: Theme::default(),
        }
    }

    /// Drive one picking session on an already acquired terminal
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails or `keys` cannot produce input.
    pub fn run_loop<B, K>(
        &self,
        terminal: &mut Terminal<B>,
        keys: &mut K,
        items: &[String],
    ) -> Result<Option<String>>
    where
        B: Backend,
        UiError: From<B::Error>,
        K: KeySource,
    {
        let mut state = PickerState::new(items);
        let hints = HelpBar::default_hints();

        loop {
            terminal.draw(|frame| self.render(frame, &mut state, &hints))?;

            match handle_key(&mut state, keys.next_key()?) {
                EventResult::Abort => return Ok(None),
                EventResult::Confirm(item) => return Ok(Some(item)),
                EventResult::QueryChanged => state.refilter(),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
    }

    /// Prompt on the first row, hints on the last, candidates in between
    fn render(&self, frame: &mut Frame, state: &mut PickerState<'_>, hints: &[KeyHint]) {
        let [prompt_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        state.set_visible_height(list_area.height as usize);

        frame.render_widget(SearchBar::new(&state.query, &self.prompt, &self.theme), prompt_area);
        frame.render_widget(ItemList::new(state, &self.theme), list_area);
        frame.render_widget(
            HelpBar::new(hints, state.filtered_indices.len(), state.items.len(), &self.theme),
            hint_area,
        );
    }
}

impl Default for RatatuiPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for RatatuiPicker {
    fn pick(&self, items: &[String]) -> Result<Option<String>> {
        if items.is_empty() {
            return Err(UiError::NoCandidates);
        }

        // Restored when `session` drops, whichever way the loop exits
        let mut session = TerminalSession::acquire()?;
        self.run_loop(session.terminal_mut(), &mut TerminalKeys, items)
    }
}
