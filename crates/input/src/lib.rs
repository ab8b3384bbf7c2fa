//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into the game's
//! [`InputSnapshot`](crate::types::InputSnapshot) and drains the event queue
//! once per tick. Mouse positions are handed to a caller-supplied mapping so
//! this crate stays ignorant of the screen layout.

pub mod map;
pub mod poll;

pub use bblock_types as types;

pub use map::{is_quit_chord, key_input, pointer_button};
pub use poll::{apply_event, InputPoller};
