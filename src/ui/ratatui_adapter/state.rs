//! Application state for the ratatui picker
//!
//! Holds the query, the filtered view and the cursor for one picking
//! session. The candidate list itself is borrowed and never changes while
//! the session runs.

use crate::matcher::matching_indices;

/// Text shown in place of the list when nothing matches
pub const NO_MATCHES: &str = "No matches found";

/// State for one picking session
#[derive(Debug)]
pub struct PickerState<'a> {
    /// All candidates, in display order
    pub items: &'a [String],
    /// Indices of candidates matching the current query
    pub filtered_indices: Vec<usize>,
    /// Position in `filtered_indices`; 0 when nothing matches
    pub cursor: usize,
    /// Current search query
    pub query: String,
    /// First visible row of the filtered list
    pub scroll_offset: usize,
    /// Height of the visible item list area (set during render)
    pub visible_height: usize,
}

impl<'a> PickerState<'a> {
    /// Create state with an empty query showing every item
    #[must_use]
    pub fn new(items: &'a [String]) -> Self {
        Self {
            items,
            filtered_indices: (0..items.len()).collect(),
            cursor: 0,
            query: String::new(),
            scroll_offset: 0,
            visible_height: 20, // updated during render
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered_indices.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Update the list height and keep the cursor on screen
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = if height == 0 { 1 } else { height };
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    ///
    /// The window never starts past the point where it could be filled, so
    /// a shorter view after re-filtering shows its leading entries again.
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }

        let max_offset = self.filtered_indices.len().saturating_sub(self.visible_height);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character of the query
    ///
    /// Returns `false` when the query was already empty.
    pub fn query_backspace(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Re-run the matcher over all items and clamp the cursor
    pub fn refilter(&mut self) {
        self.filtered_indices = matching_indices(&self.query, self.items);
        self.cursor = self
            .cursor
            .min(self.filtered_indices.len().saturating_sub(1));
        self.adjust_scroll();
    }

    /// Whether the placeholder row is showing instead of candidates
    #[must_use]
    pub fn has_no_matches(&self) -> bool {
        self.filtered_indices.is_empty()
    }

    /// The highlighted candidate, if any
    #[must_use]
    pub fn current_item(&self) -> Option<&'a str> {
        let items = self.items;
        self.filtered_indices
            .get(self.cursor)
            .and_then(|&idx| items.get(idx))
            .map(String::as_str)
    }

    /// Candidates in the filtered view, in display order
    pub fn view(&self) -> impl Iterator<Item = &'a str> + '_ {
        let items = self.items;
        self.filtered_indices
            .iter()
            .filter_map(move |&idx| items.get(idx).map(String::as_str))
    }
}
