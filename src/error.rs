//! Error types.
//!
//! Input rejections are recoverable: they surface on the status line and
//! the main loop keeps consuming keys. Startup failures are fatal and make
//! the process exit non-zero before the main loop is entered.

use thiserror::Error;

/// A keystroke the state machine rejected. No state changes when one of
/// these is raised; the display shows the message until the next key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The active entry already holds `ENTRY_WIDTH` characters.
    #[error("No more room in this entry.")]
    EntryTooLong,
    /// Every stack slot is committed; nothing further can be pushed.
    #[error("Stack is full.")]
    OutOfCapacity,
}

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("terminal is too small: need {min_cols}x{min_rows}, have {cols}x{rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
    #[error("terminal initialization failed")]
    Terminal(#[from] std::io::Error),
}
