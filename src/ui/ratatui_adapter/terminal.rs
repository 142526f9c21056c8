//! Scoped ownership of the interactive terminal
//!
//! The picker draws on stderr so stdout stays free for command output
//! (`ignorepick pick --print > .gitignore`).

use crate::ui::error::{Result, UiError};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal, Stderr};

/// Raw-mode, alternate-screen terminal that is restored on drop
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl TerminalSession {
    /// Switch the terminal into raw mode and the alternate screen
    ///
    /// Nothing is left modified when this fails.
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalUnavailable` when stdin or stderr is not a
    /// terminal or the terminal refuses the mode switch.
    pub fn acquire() -> Result<Self> {
        if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
            return Err(UiError::TerminalUnavailable(
                "stdin and stderr must be attached to a terminal".to_string(),
            ));
        }

        enable_raw_mode()
            .map_err(|e| UiError::TerminalUnavailable(format!("cannot enable raw mode: {e}")))?;

        let mut stderr = io::stderr();
        if let Err(e) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(UiError::TerminalUnavailable(format!(
                "cannot enter alternate screen: {e}"
            )));
        }

        match Terminal::new(CrosstermBackend::new(stderr)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = Self::restore_modes();
                Err(UiError::TerminalUnavailable(e.to_string()))
            }
        }
    }

    /// The drawable terminal
    pub const fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stderr>> {
        &mut self.terminal
    }

    fn restore_modes() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = Self::restore_modes() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }
        let _ = self.terminal.show_cursor();
    }
}
