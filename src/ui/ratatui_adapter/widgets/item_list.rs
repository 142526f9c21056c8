//! Item list widget for displaying filtered candidates

use crate::ui::ratatui_adapter::state::{NO_MATCHES, PickerState};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{List, ListItem, Widget},
};

/// Item list widget; the highlighted row is drawn in reverse video
pub struct ItemList<'a, 'items> {
    /// Picker state
    state: &'a PickerState<'items>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a, 'items> ItemList<'a, 'items> {
    /// Create a new item list widget
    #[must_use]
    pub const fn new(state: &'a PickerState<'items>, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ItemList<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.state.has_no_matches() {
            let placeholder = ListItem::new(NO_MATCHES).style(self.theme.placeholder_style());
            List::new([placeholder]).render(area, buf);
            return;
        }

        let start = self.state.scroll_offset;
        let items: Vec<ListItem> = self
            .state
            .view()
            .enumerate()
            .skip(start)
            .take(area.height as usize)
            .map(|(visible_idx, item)| {
                let style = if visible_idx == self.state.cursor {
                    self.theme.selected_style()
                } else {
                    self.theme.normal_style()
                };
                ListItem::new(item).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
