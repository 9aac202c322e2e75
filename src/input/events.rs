//! Key event vocabulary and crossterm conversion.
//!
//! The state machine understands a handful of inputs; everything else maps
//! to [`KeyInput::Other`] and is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One keypress, reduced to what the entry state machine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A digit or decimal point to append to the active entry.
    Digit(char),
    /// Commit the active entry and advance the stack.
    Enter,
    /// Erase the character before the entry cursor.
    Backspace,
    /// Ctrl-C: leave the main loop so the terminal can be restored.
    Interrupt,
    /// Anything else.
    Other,
}

/// Convert a crossterm key event to our vocabulary.
///
/// Release events are dropped so terminals speaking the Kitty protocol do
/// not double-type. Delete behaves as backspace; both erase the character
/// before the cursor.
pub fn convert_key_event(event: &KeyEvent) -> KeyInput {
    if event.kind == KeyEventKind::Release {
        return KeyInput::Other;
    }
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyInput::Interrupt
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => KeyInput::Digit(ch),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Backspace | KeyCode::Delete => KeyInput::Backspace,
        _ => KeyInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_and_dot_convert() {
        assert_eq!(convert_key_event(&press(KeyCode::Char('7'))), KeyInput::Digit('7'));
        assert_eq!(convert_key_event(&press(KeyCode::Char('.'))), KeyInput::Digit('.'));
    }

    #[test]
    fn test_enter_backspace_delete() {
        assert_eq!(convert_key_event(&press(KeyCode::Enter)), KeyInput::Enter);
        assert_eq!(convert_key_event(&press(KeyCode::Backspace)), KeyInput::Backspace);
        assert_eq!(convert_key_event(&press(KeyCode::Delete)), KeyInput::Backspace);
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(convert_key_event(&event), KeyInput::Interrupt);
    }

    #[test]
    fn test_letters_are_other() {
        assert_eq!(convert_key_event(&press(KeyCode::Char('q'))), KeyInput::Other);
        assert_eq!(convert_key_event(&press(KeyCode::Left)), KeyInput::Other);
    }

    #[test]
    fn test_release_events_are_dropped() {
        let mut event = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(convert_key_event(&event), KeyInput::Other);
    }
}
