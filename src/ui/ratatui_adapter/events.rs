//! Event handling for the ratatui picker
//!
//! Maps key events to state transitions. Reading events is separated from
//! handling them so the transition table can be driven by scripted keys.

use super::state::PickerState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Cursor moved, redraw
    Continue,
    /// Exit with the highlighted candidate
    Confirm(String),
    /// Exit without a selection
    Abort,
    /// Query changed, needs re-matching
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Source of key events for the picker loop
pub trait KeySource {
    /// Block until the next key press
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

/// Reads key presses from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            // Resize events fall through to a redraw on the next key
            if let Event::Key(key) = event::read()? {
                return Ok(key);
            }
        }
    }
}

/// Replays a fixed list of keys, then reports end of input
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    /// Create a source from key events
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Shorthand: typed text followed by extra keys
    #[must_use]
    pub fn typed(text: &str, then: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(
            text.chars()
                .map(KeyCode::Char)
                .chain(then)
                .map(|code| KeyEvent::new(code, KeyModifiers::NONE)),
        )
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}

/// Whether `c` is in the printable ASCII range accepted by the query
const fn is_query_char(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Apply one key event to the picker state
pub fn handle_key(state: &mut PickerState<'_>, key: KeyEvent) -> EventResult {
    // Release and repeat events are reported on some platforms
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }

    match (key.code, key.modifiers) {
        // Exit. Raw mode swallows SIGINT so ctrl-c has to be handled here
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => state
            .current_item()
            .map_or(EventResult::Ignored, |item| {
                EventResult::Confirm(item.to_string())
            }),

        // Navigation
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Backspace, _) => {
            if state.query_backspace() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if is_query_char(c) => {
            state.query_push(c);
            EventResult::QueryChanged
        }

        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        ["Node.gitignore", "Python.gitignore", "Go.gitignore"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_handling() {
        let items = items();
        let mut state = PickerState::new(&items);

        let result = handle_key(&mut state, press(KeyCode::Down));
        assert_eq!(result, EventResult::Continue);
        assert_eq!(state.cursor, 1);

        let result = handle_key(&mut state, press(KeyCode::Up));
        assert_eq!(result, EventResult::Continue);
        assert_eq!(state.cursor, 0);

        handle_key(&mut state, press(KeyCode::Up));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_query_input() {
        let items = items();
        let mut state = PickerState::new(&items);

        let result = handle_key(&mut state, press(KeyCode::Char('g')));
        assert_eq!(result, EventResult::QueryChanged);
        assert_eq!(state.query, "g");

        let result = handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('O'), KeyModifiers::SHIFT),
        );
        assert_eq!(result, EventResult::QueryChanged);
        assert_eq!(state.query, "gO");
    }

    #[test]
    fn test_non_printable_and_modified_keys_ignored() {
        let items = items();
        let mut state = PickerState::new(&items);

        assert_eq!(handle_key(&mut state, press(KeyCode::Char('é'))), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, press(KeyCode::Tab)), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, press(KeyCode::F(1))), EventResult::Ignored);
        assert_eq!(
            handle_key(&mut state, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            EventResult::Ignored
        );
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_backspace_on_empty_query() {
        let items = items();
        let mut state = PickerState::new(&items);

        assert_eq!(handle_key(&mut state, press(KeyCode::Backspace)), EventResult::Ignored);
        handle_key(&mut state, press(KeyCode::Char('x')));
        assert_eq!(handle_key(&mut state, press(KeyCode::Backspace)), EventResult::QueryChanged);
    }

    #[test]
    fn test_abort() {
        let items = items();
        let mut state = PickerState::new(&items);

        assert_eq!(handle_key(&mut state, press(KeyCode::Esc)), EventResult::Abort);
        assert_eq!(
            handle_key(&mut state, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Abort
        );
    }

    #[test]
    fn test_confirm() {
        let items = items();
        let mut state = PickerState::new(&items);
        state.cursor_down();

        assert_eq!(
            handle_key(&mut state, press(KeyCode::Enter)),
            EventResult::Confirm("Python.gitignore".to_string())
        );
    }

    #[test]
    fn test_confirm_on_placeholder_is_ignored() {
        let items = items();
        let mut state = PickerState::new(&items);
        state.query = "zzz".to_string();
        state.refilter();

        assert_eq!(handle_key(&mut state, press(KeyCode::Enter)), EventResult::Ignored);
    }

    #[test]
    fn test_release_events_ignored() {
        let items = items();
        let mut state = PickerState::new(&items);
        let mut key = press(KeyCode::Down);
        key.kind = KeyEventKind::Release;

        assert_eq!(handle_key(&mut state, key), EventResult::Ignored);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_scripted_keys() {
        let mut keys = ScriptedKeys::typed("py", [KeyCode::Enter]);

        assert_eq!(keys.next_key().unwrap().code, KeyCode::Char('p'));
        assert_eq!(keys.next_key().unwrap().code, KeyCode::Char('y'));
        assert_eq!(keys.next_key().unwrap().code, KeyCode::Enter);
        assert!(keys.next_key().is_err());
    }

    /// Small deterministic generator so sequences are reproducible
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: usize) -> usize {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((self.0 >> 33) % bound as u64) as usize
        }
    }

    #[test]
    fn test_cursor_stays_in_view_for_generated_sequences() {
        let item_sets: Vec<Vec<String>> = vec![
            items(),
            (0..25).map(|i| format!("t{i:02}.gitignore")).collect(),
            vec!["Go.gitignore".to_string()],
            ["Global/macOS.gitignore", "Global/Vim.gitignore", "Node.gitignore", "xa", "xb"]
                .into_iter()
                .map(String::from)
                .collect(),
        ];
        let keys = [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Backspace,
            KeyCode::Char('g'),
            KeyCode::Char('o'),
            KeyCode::Char('x'),
            KeyCode::Char('.'),
            KeyCode::Char('1'),
            KeyCode::Char('z'),
        ];
        let mut rng = Lcg(7);

        for items in &item_sets {
            for height in [1, 3, 8] {
                for _ in 0..50 {
                    let mut state = PickerState::new(items);
                    state.set_visible_height(height);

                    for _ in 0..40 {
                        let code = keys[rng.next(keys.len())];
                        if handle_key(&mut state, press(code)) == EventResult::QueryChanged {
                            state.refilter();
                        }

                        if state.has_no_matches() {
                            assert_eq!(state.cursor, 0);
                            assert_eq!(state.current_item(), None);
                        } else {
                            assert!(state.cursor < state.filtered_indices.len());
                            assert!(state.scroll_offset <= state.cursor);
                            assert!(state.cursor < state.scroll_offset + state.visible_height);
                            let rows_used = state.filtered_indices.len() - state.scroll_offset;
                            let fill = state.visible_height.min(state.filtered_indices.len());
                            assert!(rows_used >= fill);
                        }
                    }
                }
            }
        }
    }
}
