//! Screen abstraction: pure translation of calculator state to draw calls.
//!
//! The controller never touches the terminal directly; it issues draw calls
//! against the [`Screen`] trait and the terminal-backed implementation in
//! [`term`] turns them into queued crossterm commands. Tests substitute a
//! recording implementation.

use std::borrow::Cow;
use std::io;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::consts::STACK_DEPTH;

pub mod term;

pub use term::TermScreen;

bitflags::bitflags! {
    /// Screen regions with queued but unflushed draw commands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Dirty: u8 {
        const STATUS = 1 << 0;
        const STACK  = 1 << 1;
        const CURSOR = 1 << 2;
    }
}

/// Which window a cursor move targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Status,
    Stack,
}

/// The drawing capability the calculator needs from a terminal.
///
/// Draw calls only accumulate; nothing reaches the physical terminal until
/// `refresh`. Coordinates for the stack are panel-relative, with row 0 on
/// the panel's top border.
pub trait Screen {
    /// Write `text` to the one-line status window, replacing its previous
    /// contents.
    fn draw_status(&mut self, text: &str);

    /// Write one character into the boxed stack panel, leaving the border
    /// intact.
    fn draw_stack_char(&mut self, row: u16, col: u16, ch: char);

    /// Reposition the blinking input cursor.
    fn move_cursor(&mut self, window: Window, row: u16, col: u16);

    /// Flush pending draw calls to the physical terminal.
    fn refresh(&mut self) -> io::Result<()>;
}

/// Panel row for a stack level.
///
/// The stack grows upward: level 0 sits on the lowest writable row, just
/// above the bottom border, and each committed slot pushes entry one row up.
#[inline]
pub fn stack_row(level: usize) -> u16 {
    debug_assert!(level < STACK_DEPTH);
    (STACK_DEPTH - level) as u16
}

/// Panel column for a buffer offset (column 0 is the left border).
#[inline]
pub fn entry_col(offset: usize) -> u16 {
    1 + offset as u16
}

/// Clip `text` to at most `max` terminal columns, marking the cut with an
/// ellipsis.
pub fn truncate_to_width(text: &str, max: usize) -> Cow<'_, str> {
    if text.width() <= max {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(max);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    Cow::Owned(out)
}
