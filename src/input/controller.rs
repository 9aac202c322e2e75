//! The entry state machine.
//!
//! Consumes one [`KeyInput`] at a time, mutates the stack and status line,
//! and drives the screen so every processed key ends with a flushed,
//! consistent display. Rejections (`EntryTooLong`, `OutOfCapacity`) become
//! status-line errors and never stop input consumption.

use std::io;

use crate::display::{entry_col, stack_row, Screen, Window};
use crate::input::KeyInput;
use crate::stack::Stack;
use crate::status::StatusLine;

/// Observable state of the machine.
///
/// `Editing(slot)` is the sole operating state; `Full` is reached when
/// every stack slot is committed, after which digits and enter are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Editing(usize),
    Full,
}

pub struct InputController {
    stack: Stack,
    status: StatusLine,
}

impl InputController {
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            status: StatusLine::new(),
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.stack.is_full() {
            ControllerState::Full
        } else {
            ControllerState::Editing(self.stack.active())
        }
    }

    #[inline]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    #[inline]
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Process one key event: mutate state, issue the matching draw calls,
    /// flush. Returns `Ok(false)` when the key asks the program to stop.
    pub fn handle_key(&mut self, key: KeyInput, screen: &mut impl Screen) -> io::Result<bool> {
        self.status.mark_seen();
        match key {
            KeyInput::Interrupt => return Ok(false),
            KeyInput::Digit(ch) => self.on_digit(ch, screen),
            KeyInput::Enter => self.on_enter(),
            KeyInput::Backspace => self.on_backspace(screen),
            KeyInput::Other => {}
        }
        screen.draw_status(&self.status.render());
        self.place_cursor(screen);
        screen.refresh()?;
        Ok(true)
    }

    /// Redraw everything from state: committed slots, the partial entry,
    /// the status line and the cursor. Used for the initial paint.
    pub fn repaint(&self, screen: &mut impl Screen) -> io::Result<()> {
        for level in 0..self.stack.active().saturating_add(1) {
            let Some(slot) = self.stack.get(level) else {
                break;
            };
            for (offset, ch) in slot.as_str().chars().enumerate() {
                screen.draw_stack_char(stack_row(level), entry_col(offset), ch);
            }
        }
        screen.draw_status(&self.status.render());
        self.place_cursor(screen);
        screen.refresh()
    }

    fn on_digit(&mut self, ch: char, screen: &mut impl Screen) {
        let level = self.stack.active();
        match self.stack.current() {
            Ok(entry) => match entry.push(ch) {
                Ok(()) => {
                    let col = entry_col(entry.cursor() - 1);
                    screen.draw_stack_char(stack_row(level), col, ch);
                    self.status.entering();
                }
                Err(err) => self.status.error(err),
            },
            Err(err) => self.status.error(err),
        }
    }

    fn on_enter(&mut self) {
        let level = self.stack.active();
        match self.stack.push_commit() {
            Ok(value) => {
                let text = self
                    .stack
                    .get(level)
                    .map(|slot| slot.as_str().to_string())
                    .unwrap_or_default();
                log::debug!("committed slot {level}: {text:?} = {value}");
                self.status.ready();
                self.status.advise(text);
            }
            Err(err) => self.status.error(err),
        }
    }

    fn on_backspace(&mut self, screen: &mut impl Screen) {
        // Backspace edits within the active entry only: it never reopens a
        // committed slot, and once the stack is full there is nothing left
        // to edit.
        let level = self.stack.active();
        if let Ok(entry) = self.stack.current() {
            if entry.backspace() {
                let col = entry_col(entry.cursor());
                screen.draw_stack_char(stack_row(level), col, ' ');
                if entry.is_empty() {
                    self.status.ready();
                }
            }
        }
    }

    /// Park the cursor at the active entry's next write position, or in the
    /// status bracket when the stack is full.
    fn place_cursor(&self, screen: &mut impl Screen) {
        match self.stack.current_ref() {
            Ok(entry) => {
                let level = self.stack.active();
                screen.move_cursor(Window::Stack, stack_row(level), entry_col(entry.cursor()));
            }
            Err(_) => screen.move_cursor(Window::Status, 0, 1),
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}
