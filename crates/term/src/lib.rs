//! Terminal frontend module.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`FrameState`](crate::core::FrameState) into a framebuffer, the renderer
//! diffs and flushes it with crossterm, and the bell stands in for audio.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One layout shared by drawing and mouse hit mapping
//! - Redraw only what changed

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use bblock_core as core;
pub use bblock_types as types;

pub use audio::BellAudio;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, OFF_FIELD};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
