//! End-to-end scenarios: keystream in, stack + draw calls out.
//!
//! Drives the controller exactly like the binary's main loop does, against
//! a recording screen instead of a terminal.

use std::io;

use rpncalc::consts::{ENTRY_WIDTH, STACK_DEPTH};
use rpncalc::display::{Screen, Window};
use rpncalc::input::{ControllerState, InputController, KeyInput};

#[derive(Default)]
struct RecordingScreen {
    chars: Vec<(u16, u16, char)>,
    statuses: Vec<String>,
    cursors: Vec<(Window, u16, u16)>,
}

impl Screen for RecordingScreen {
    fn draw_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn draw_stack_char(&mut self, row: u16, col: u16, ch: char) {
        self.chars.push((row, col, ch));
    }

    fn move_cursor(&mut self, window: Window, row: u16, col: u16) {
        self.cursors.push((window, row, col));
    }

    fn refresh(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn keystream(keys: &str) -> (InputController, RecordingScreen) {
    let mut controller = InputController::new();
    let mut screen = RecordingScreen::default();
    for ch in keys.chars() {
        let key = match ch {
            '\n' => KeyInput::Enter,
            '\x08' => KeyInput::Backspace,
            other => KeyInput::Digit(other),
        };
        controller.handle_key(key, &mut screen).unwrap();
    }
    (controller, screen)
}

#[test]
fn entering_two_numbers_commits_both_slots() {
    let (controller, screen) = keystream("12.5\n3\n");

    let stack = controller.stack();
    assert!(stack.get(0).unwrap().is_committed());
    assert!(stack.get(1).unwrap().is_committed());
    assert_eq!(stack.get(0).unwrap().value(), 12.5);
    assert_eq!(stack.get(1).unwrap().value(), 3.0);
    assert_eq!(stack.active(), 2);

    // The committed text appeared on the status line, in commit order.
    let first = screen.statuses.iter().position(|s| s.ends_with("| 12.5"));
    let second = screen.statuses.iter().position(|s| s.ends_with("| 3"));
    assert!(first.is_some() && second.is_some());
    assert!(first < second);
}

#[test]
fn twenty_one_digits_keep_only_twenty() {
    let (controller, _screen) = keystream(&"7".repeat(ENTRY_WIDTH + 1));

    let entry = controller.stack().get(0).unwrap();
    assert_eq!(entry.as_str().len(), ENTRY_WIDTH);
    assert_eq!(entry.cursor(), ENTRY_WIDTH);
    assert!(controller.status().has_error());
}

#[test]
fn eleven_commits_on_a_ten_slot_stack() {
    let keys = "1\n".repeat(STACK_DEPTH);
    let (mut controller, mut screen) = keystream(&keys);
    assert_eq!(controller.state(), ControllerState::Full);

    // The eleventh enter is rejected without mutating any slot.
    let before = controller.stack().clone();
    controller
        .handle_key(KeyInput::Enter, &mut screen)
        .unwrap();
    assert_eq!(controller.state(), ControllerState::Full);
    assert_eq!(controller.stack(), &before);
    assert!(controller.status().has_error());
}

#[test]
fn backspace_round_trip_restores_the_entry() {
    let (controller, _screen) = keystream("3.1\x084");
    assert_eq!(controller.stack().get(0).unwrap().as_str(), "3.4");
}

#[test]
fn digits_climb_the_panel_as_slots_commit() {
    let (_, screen) = keystream("1\n2\n3");

    let bottom = STACK_DEPTH as u16;
    assert!(screen.chars.contains(&(bottom, 1, '1')));
    assert!(screen.chars.contains(&(bottom - 1, 1, '2')));
    assert!(screen.chars.contains(&(bottom - 2, 1, '3')));
}

#[test]
fn cursor_tracks_the_entry_position() {
    let (_, screen) = keystream("12");
    assert_eq!(
        screen.cursors.last(),
        Some(&(Window::Stack, STACK_DEPTH as u16, 3))
    );
}

#[test]
fn empty_commit_pushes_the_sentinel_zero() {
    let (controller, _screen) = keystream("\n");
    let slot = controller.stack().get(0).unwrap();
    assert!(slot.is_committed());
    assert_eq!(slot.value(), 0.0);
}

#[test]
fn full_stack_keeps_consuming_input_without_crashing() {
    let keys = "9\n".repeat(STACK_DEPTH);
    let (mut controller, mut screen) = keystream(&keys);

    for key in [
        KeyInput::Digit('1'),
        KeyInput::Enter,
        KeyInput::Backspace,
        KeyInput::Other,
    ] {
        let more = controller.handle_key(key, &mut screen).unwrap();
        assert!(more);
    }
    assert_eq!(controller.state(), ControllerState::Full);
}
