//! UI abstraction layer
//!
//! The install workflow only sees the [`Picker`] trait and an
//! [`OutputWriter`]; the ratatui backend lives in [`ratatui_adapter`].
//!
//! # Picking interactively
//!
//! ```no_run
//! use ignorepick::ui::{Picker, RatatuiPicker};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let items = vec!["Go.gitignore".to_string(), "Rust.gitignore".to_string()];
//!
//! match RatatuiPicker::new().pick(&items)? {
//!     Some(choice) => println!("Selected: {choice}"),
//!     None => println!("Cancelled"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use ignorepick::ui::output::{OutputWriter, StderrWriter};
//!
//! let output = StderrWriter::new(false);
//! output.success("Operation completed!");
//! output.error("Something went wrong");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

mod error;
mod traits;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StderrWriter};
pub use ratatui_adapter::RatatuiPicker;
pub use traits::Picker;
