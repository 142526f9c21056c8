//! Ratatui widgets for the picker TUI

mod help_bar;
mod item_list;
mod search_bar;

pub use help_bar::{HelpBar, KeyHint};
pub use item_list::ItemList;
pub use search_bar::SearchBar;
