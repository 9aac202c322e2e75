//! Constant values used across rpncalc.

/// Program identity shown on the left of the status line.
pub const PROGRAM_NAME: &str = concat!("rpncalc ", env!("CARGO_PKG_VERSION"));

/// Maximum number of characters in one entry (one stack line).
pub const ENTRY_WIDTH: usize = 20;

/// Number of slots the stack can hold; also the writable height of the
/// stack panel.
pub const STACK_DEPTH: usize = 10;

/// Stack panel outer geometry, border included. The inner width leaves one
/// column of border on each side of a full-width entry.
pub const STACK_PANEL_WIDTH: u16 = ENTRY_WIDTH as u16 + 2;
pub const STACK_PANEL_HEIGHT: u16 = STACK_DEPTH as u16 + 2;

/// Screen row where the stack panel starts (just below the status line).
pub const STACK_PANEL_TOP: u16 = 1;

/// Width of the status line.
pub const STATUS_WIDTH: u16 = 50;

/// Smallest terminal the fixed layout fits in.
pub const MIN_TERM_WIDTH: u16 = STATUS_WIDTH;
pub const MIN_TERM_HEIGHT: u16 = STACK_PANEL_TOP + STACK_PANEL_HEIGHT;
