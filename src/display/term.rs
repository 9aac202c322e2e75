//! Crossterm-backed screen.
//!
//! All draw calls queue escape sequences into an internal buffer; `refresh`
//! writes the buffer to the terminal in one syscall and parks the hardware
//! cursor at the entry position. Writing into the buffer cannot fail, so
//! only `refresh` surfaces I/O errors.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::consts::{
    ENTRY_WIDTH, STACK_PANEL_HEIGHT, STACK_PANEL_TOP, STACK_PANEL_WIDTH, STATUS_WIDTH,
};
use super::{truncate_to_width, Dirty, Screen, Window};

const PANEL_HEADING: &str = "Stack";

pub struct TermScreen<W: Write> {
    out: W,
    buf: Vec<u8>,
    dirty: Dirty,
    /// Absolute position the hardware cursor is parked at after a flush.
    cursor: (u16, u16),
}

impl<W: Write> TermScreen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4096),
            dirty: Dirty::empty(),
            cursor: (1, 0),
        }
    }

    /// Clear the terminal and draw the static chrome: the bordered stack
    /// panel with its heading. Flushes before returning.
    pub fn init(&mut self) -> io::Result<()> {
        queue!(self.buf, Clear(ClearType::All), crossterm::cursor::Show).ok();
        self.draw_panel_frame();
        self.dirty |= Dirty::STATUS | Dirty::STACK;
        self.refresh()
    }

    fn draw_panel_frame(&mut self) {
        let inner = STACK_PANEL_WIDTH as usize - 2;
        let top = format!("┌{}┐", "─".repeat(inner));
        let mid = format!("│{}│", " ".repeat(inner));
        let bottom = format!("└{}┘", "─".repeat(inner));

        queue!(self.buf, MoveTo(0, STACK_PANEL_TOP), Print(&top)).ok();
        for row in 1..STACK_PANEL_HEIGHT - 1 {
            queue!(self.buf, MoveTo(0, STACK_PANEL_TOP + row), Print(&mid)).ok();
        }
        queue!(
            self.buf,
            MoveTo(0, STACK_PANEL_TOP + STACK_PANEL_HEIGHT - 1),
            Print(&bottom)
        )
        .ok();

        // Heading sits centered on the top border, curses style.
        let x = (STACK_PANEL_WIDTH as usize - PANEL_HEADING.len()) / 2;
        queue!(
            self.buf,
            MoveTo(x as u16, STACK_PANEL_TOP),
            Print(PANEL_HEADING)
        )
        .ok();
    }
}

impl<W: Write> Screen for TermScreen<W> {
    fn draw_status(&mut self, text: &str) {
        let text = truncate_to_width(text, STATUS_WIDTH as usize);
        let pad = STATUS_WIDTH as usize - unicode_width::UnicodeWidthStr::width(text.as_ref());
        queue!(
            self.buf,
            MoveTo(0, 0),
            Print(text.as_ref()),
            Print(" ".repeat(pad))
        )
        .ok();
        self.dirty |= Dirty::STATUS;
    }

    fn draw_stack_char(&mut self, row: u16, col: u16, ch: char) {
        // Never paint over the border.
        if row == 0 || row >= STACK_PANEL_HEIGHT - 1 || col == 0 || col > ENTRY_WIDTH as u16 {
            return;
        }
        queue!(self.buf, MoveTo(col, STACK_PANEL_TOP + row), Print(ch)).ok();
        self.dirty |= Dirty::STACK;
    }

    fn move_cursor(&mut self, window: Window, row: u16, col: u16) {
        self.cursor = match window {
            Window::Status => (col, 0),
            Window::Stack => (col, STACK_PANEL_TOP + row),
        };
        self.dirty |= Dirty::CURSOR;
    }

    fn refresh(&mut self) -> io::Result<()> {
        if self.dirty.is_empty() {
            return Ok(());
        }
        queue!(self.buf, MoveTo(self.cursor.0, self.cursor.1)).ok();
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        self.dirty = Dirty::empty();
        Ok(())
    }
}
