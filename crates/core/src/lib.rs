//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the game and nothing else. It has **no
//! dependencies** on the terminal, the filesystem or the clock, which makes it:
//!
//! - **Deterministic**: a seed fully determines the spawn sequence
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: the same controller can drive any frontend
//!
//! # Module Structure
//!
//! - [`block`]: a falling block and its hit box
//! - [`spawner`]: per-cycle lane selection with an injectable random source
//! - [`session`]: one playthrough (blocks, score, tick and click resolution)
//! - [`high_score`]: high score value plus the storage and audio seams
//! - [`controller`]: Title / Playing / GameOver state machine
//! - [`frame`]: borrowed view handed to the renderer
//!
//! # Game Rules
//!
//! - Blocks spawn once per cycle of `floor(block_height / fall_rate)` ticks
//! - Each cycle draws 1–4 lanes, stopping after each draw with probability 0.75
//! - Every tick each block falls by `fall_rate`
//! - A block within one step of the floor ends the round
//! - Clicking a block removes it and scores one point
//! - Beating the high score persists it when the round ends
//!
//! # Example
//!
//! ```
//! use bblock_core::{Block, ScriptedRandom, Session};
//! use bblock_types::{DifficultyLevel, DifficultyProfile, HitResult, Lane, Point, TickResult};
//!
//! let profile = DifficultyProfile::for_level(DifficultyLevel::new(1).unwrap());
//! let mut session = Session::new(profile, ScriptedRandom::default());
//! session.push_block(Block::new(Lane::new(0).unwrap()));
//!
//! for _ in 0..40 {
//!     assert_eq!(session.tick(), TickResult::Continue);
//! }
//!
//! // The block has fallen 80 units; its lower edge is 220 above the floor.
//! assert_eq!(session.resolve_click(Point::new(25.0, 30.0)), HitResult::Hit(1));
//! assert!(session.blocks().is_empty());
//! ```

pub mod block;
pub mod controller;
pub mod frame;
pub mod high_score;
pub mod session;
pub mod spawner;

pub use bblock_types as types;

pub use block::Block;
pub use controller::{Flow, GameController, SeedSource};
pub use frame::FrameState;
pub use high_score::{AudioSink, HighScore, HighScoreStore, MemoryStore, NullAudio};
pub use session::Session;
pub use spawner::{seeded_rng, LaneSet, ScriptedRandom, SpawnRandom};
