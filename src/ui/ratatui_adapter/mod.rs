//! Ratatui-based picker adapter
//!
//! This module provides an implementation of the `Picker` trait using
//! ratatui for drawing and crossterm for terminal modes and key input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiPicker                     │
//! │  (implements Picker trait)                  │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  matcher   │ │  Ratatui  │ │ Crossterm │
//! │ (filter)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! The loop is strictly turn based: draw, block on one key, update state.

mod events;
mod finder;
mod state;
mod terminal;
mod theme;
pub mod widgets;

pub use events::{EventResult, KeySource, ScriptedKeys, TerminalKeys, handle_key};
pub use finder::RatatuiPicker;
pub use state::{NO_MATCHES, PickerState};
pub use terminal::TerminalSession;
pub use theme::Theme;
