//! Status-line model.
//!
//! The status line shows a one-character mode indicator in brackets, the
//! program name, and a message region. Errors and committed values override
//! the mode's default message until the next key event; `mark_seen` gives
//! them one-shot semantics so a message survives exactly one loop iteration
//! after it is raised.

use crate::consts::PROGRAM_NAME;
use crate::error::InputError;

/// UI modality: is a number currently being typed?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ready,
    Entering,
}

impl Mode {
    fn status_char(self) -> char {
        match self {
            Mode::Ready => ' ',
            Mode::Entering => 'i',
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Mode::Ready => "Ready (ctrl-c quits)",
            Mode::Entering => "Insert",
        }
    }
}

/// Current contents of the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    mode: Mode,
    override_msg: Option<String>,
    is_error: bool,
    seen: bool,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            mode: Mode::Ready,
            override_msg: None,
            is_error: false,
            seen: true,
        }
    }

    /// Clear any message and return to the Ready mode.
    pub fn ready(&mut self) {
        self.mode = Mode::Ready;
        self.clear_override();
    }

    /// Switch to the Entering mode (a number is being typed).
    pub fn entering(&mut self) {
        self.mode = Mode::Entering;
    }

    /// Show an informational message (e.g. the value just committed).
    pub fn advise(&mut self, msg: impl Into<String>) {
        self.override_msg = Some(msg.into());
        self.is_error = false;
        self.seen = false;
    }

    /// Show a rejected keystroke on the status line.
    pub fn error(&mut self, err: InputError) {
        self.override_msg = Some(err.to_string());
        self.is_error = true;
        self.seen = false;
    }

    /// Called at the top of every loop iteration. A message that has
    /// already survived one iteration is dropped; a fresh one is kept and
    /// marked so it is dropped the next time around.
    pub fn mark_seen(&mut self) {
        if self.seen {
            self.clear_override();
        } else {
            self.seen = true;
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        self.is_error
    }

    /// The one-character mode indicator.
    pub fn status_char(&self) -> char {
        if self.is_error { 'E' } else { self.mode.status_char() }
    }

    /// The message region text.
    pub fn message(&self) -> &str {
        self.override_msg
            .as_deref()
            .unwrap_or_else(|| self.mode.default_message())
    }

    /// The full status line, ready for `draw_status`.
    pub fn render(&self) -> String {
        format!("[{}] {} | {}", self.status_char(), PROGRAM_NAME, self.message())
    }

    fn clear_override(&mut self) {
        self.override_msg = None;
        self.is_error = false;
        self.seen = true;
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
