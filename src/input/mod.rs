//! Input system.
//!
//! ```text
//! crossterm KeyEvent → KeyInput → InputController → Stack / StatusLine
//!                                        │
//!                                        └── draw calls → Screen
//! ```

pub mod controller;
pub mod events;

pub use controller::{ControllerState, InputController};
pub use events::{convert_key_event, KeyInput};
