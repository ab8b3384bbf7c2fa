//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data with no I/O, so it can be shared by the
//! simulation, the terminal frontend and the host glue alike.
//!
//! # Playfield Geometry
//!
//! The playfield is measured in abstract units, not terminal cells:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LANE_COUNT` | 4 | Number of lanes |
//! | `LANE_WIDTH` | 50 | Width of one lane |
//! | `LANE_GAP` | 1 | Separator between neighbouring lanes |
//! | `FIELD_WIDTH` | 203 | `4 * 50 + 3` |
//! | `FIELD_HEIGHT` | 300 | Distance a block falls before it is lost |
//!
//! # Timing
//!
//! The simulation advances in fixed ticks at `TICK_RATE_HZ` (60 Hz). All
//! speeds are expressed in units per tick.
//!
//! # Difficulty Presets
//!
//! | Level | Block height | Fall rate | Ticks per spawn cycle |
//! |-------|--------------|-----------|-----------------------|
//! | 1 | 100 | 2.0 | 50 |
//! | 2 | 100 | 3.0 | 33 |
//! | 3 | 100 | 4.0 | 25 |
//! | 4 | 90 | 4.5 | 20 |
//! | 5 | 80 | 6.0 | 13 |
//!
//! # Examples
//!
//! ```
//! use bblock_types::{DifficultyLevel, DifficultyProfile, Lane, FIELD_WIDTH};
//!
//! let level = DifficultyLevel::new(3).unwrap();
//! let profile = DifficultyProfile::for_level(level);
//! assert_eq!(profile.ticks_per_spawn_cycle(), 25);
//!
//! let lane = Lane::new(2).unwrap();
//! assert_eq!(lane.horizontal_position(), 102.0);
//! assert_eq!(FIELD_WIDTH, 203.0);
//! ```

use arrayvec::ArrayVec;

/// Number of lanes blocks fall through.
pub const LANE_COUNT: u8 = 4;

/// Width of a single lane in playfield units.
pub const LANE_WIDTH: f64 = 50.0;

/// Width of the separator line between two lanes.
pub const LANE_GAP: f64 = 1.0;

/// Horizontal distance between the left edges of neighbouring lanes.
pub const LANE_STRIDE: f64 = LANE_WIDTH + LANE_GAP;

/// Playfield width: four lanes plus three separators.
pub const FIELD_WIDTH: f64 = LANE_WIDTH * LANE_COUNT as f64 + LANE_GAP * (LANE_COUNT - 1) as f64;

/// Playfield height in units.
pub const FIELD_HEIGHT: f64 = 300.0;

/// Fixed simulation rate.
pub const TICK_RATE_HZ: u32 = 60;

/// Fixed timestep interval in microseconds (16_666us ≈ 60 FPS)
pub const TICK_MICROS: u64 = 1_000_000 / TICK_RATE_HZ as u64;

/// Scores (and loaded high scores) never exceed this value.
pub const MAX_SCORE: u32 = 100_000;

/// Half period of the title prompt blink, in ticks.
///
/// The blink counter runs from `-TITLE_BLINK_TICKS` up to `TITLE_BLINK_TICKS - 1`
/// and the prompt is shown while it is negative.
pub const TITLE_BLINK_TICKS: i32 = 30;

/// Upper bound on input events kept per tick (extra events are dropped).
pub const MAX_EVENTS_PER_TICK: usize = 32;

/// Probability that lane sampling stops after each draw.
pub const SPAWN_STOP_PROBABILITY: f64 = 0.75;


/// One of the four lanes, always in `[0, LANE_COUNT)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lane(u8);

impl Lane {
    pub const ALL: [Lane; LANE_COUNT as usize] = [Lane(0), Lane(1), Lane(2), Lane(3)];

    /// Validate a lane index.
    ///
    /// # Examples
    ///
    /// ```
    /// use bblock_types::Lane;
    ///
    /// assert!(Lane::new(0).is_some());
    /// assert!(Lane::new(4).is_none());
    /// ```
    pub fn new(index: u8) -> Option<Self> {
        (index < LANE_COUNT).then_some(Lane(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Left edge of the lane in playfield units.
    pub fn horizontal_position(self) -> f64 {
        self.0 as f64 * LANE_STRIDE
    }
}

/// Difficulty level chosen once at startup (1 = easiest, 5 = hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const ALL: [DifficultyLevel; 5] = [
        DifficultyLevel(1),
        DifficultyLevel(2),
        DifficultyLevel(3),
        DifficultyLevel(4),
        DifficultyLevel(5),
    ];

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(DifficultyLevel(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        DifficultyLevel(1)
    }
}

/// Static block size and speed for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Block height in playfield units.
    pub block_height: f64,
    /// Units descended per tick.
    pub fall_rate: f64,
}

impl DifficultyProfile {
    /// Look up the preset for a level.
    pub fn for_level(level: DifficultyLevel) -> Self {
        let (block_height, fall_rate) = match level.0 {
            1 => (100.0, 2.0),
            2 => (100.0, 3.0),
            3 => (100.0, 4.0),
            4 => (90.0, 4.5),
            _ => (80.0, 6.0),
        };
        Self {
            block_height,
            fall_rate,
        }
    }

    /// Ticks between spawn decisions: the time a block needs to fall its own height.
    pub fn ticks_per_spawn_cycle(&self) -> u32 {
        ((self.block_height / self.fall_rate).floor() as u32).max(1)
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::for_level(DifficultyLevel::default())
    }
}

/// A position on the playfield, origin at the top-left corner, y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Key presses as the game sees them.
///
/// Only two keys matter: Escape quits, bare modifiers are ignored, everything
/// else counts as "any key".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Modifier,
    Other,
}

/// Pointer buttons. Only `Primary` hits blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A pointer press at a playfield position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub button: PointerButton,
    pub position: Point,
}

/// Everything that happened between two ticks.
///
/// The event lists are bounded. Escape and the quit request are flags so they
/// survive an overflowing tick; dropped events are counted in `overflowed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub quit_requested: bool,
    pub escape_requested: bool,
    pub keys_down: ArrayVec<KeyInput, MAX_EVENTS_PER_TICK>,
    pub pointer_down: ArrayVec<PointerDown, MAX_EVENTS_PER_TICK>,
    /// The terminal was resized; the frontend should redraw in full.
    pub resized: bool,
    /// Key or pointer events that did not fit this tick.
    pub overflowed: u32,
}

impl InputSnapshot {
    pub fn push_key(&mut self, key: KeyInput) {
        if key == KeyInput::Escape {
            self.escape_requested = true;
        }
        if self.keys_down.try_push(key).is_err() {
            self.overflowed += 1;
        }
    }

    pub fn push_pointer(&mut self, button: PointerButton, position: Point) {
        if self.pointer_down.try_push(PointerDown { button, position }).is_err() {
            self.overflowed += 1;
        }
    }

    pub fn escape_pressed(&self) -> bool {
        self.escape_requested
    }

    pub fn is_empty(&self) -> bool {
        !self.quit_requested
            && !self.escape_requested
            && !self.resized
            && self.keys_down.is_empty()
            && self.pointer_down.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Fire-and-forget audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A block was hit.
    Click,
    /// A session started.
    Begin,
    /// A session was lost.
    End,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Begin => "begin",
            SoundCue::End => "end",
        }
    }
}

/// Controller phase.
///
/// `GameOver` only exists inside a single controller step; frames are only
/// ever produced for `Title` and `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Title,
    Playing,
    GameOver,
}

/// Outcome of one session tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Lost,
}

/// Outcome of a click on the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// A block was removed; carries the new score.
    Hit(u32),
    Miss,
}
