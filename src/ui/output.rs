//! Output abstraction layer
//!
//! Every collaborator that reports progress receives an `&dyn OutputWriter`
//! instead of printing directly. `main` creates the writer once; tests swap
//! in a [`BufferedWriter`] and assert on what was reported.

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use ignorepick::ui::output::{OutputWriter, StderrWriter};
///
/// let output = StderrWriter::new(false);
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes diagnostics to stderr
///
/// Stdout is left to command results (`list` names, `pick --print`
/// contents) so they can be redirected. Errors and warnings are always
/// shown; quiet mode suppresses everything else.
pub struct StderrWriter {
    quiet: bool,
}

impl StderrWriter {
    /// Create a new stderr writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StderrWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StderrWriter {
    fn write(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Writer that keeps every message in memory
#[derive(Debug, Default)]
pub struct BufferedWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferedWriter {
    /// Create an empty buffered writer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages recorded so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of a single level
    #[must_use]
    pub fn messages_at(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferedWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}
