//! Terminal setup and teardown.
//!
//! Raw mode gives us one keypress per read with no echo; the alternate
//! screen keeps the user's scrollback clean. Restore is idempotent and also
//! runs on drop, so every exit path — normal, error, panic — leaves the
//! terminal usable.

use std::io;

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

/// Raw-mode / alternate-screen guard.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen with a visible cursor.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, cursor::Show) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { active: true })
    }

    /// Leave the alternate screen and raw mode. Safe to call more than
    /// once; later calls are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
