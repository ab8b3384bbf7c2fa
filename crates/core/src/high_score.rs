//! High score bookkeeping and the collaborator seams the controller talks to.

use std::fmt;

use crate::types::{SoundCue, MAX_SCORE};

/// Best score seen across sessions in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    value: u32,
}

impl HighScore {
    pub fn new(value: u32) -> Self {
        Self {
            value: value.min(MAX_SCORE),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Raise the high score if `score` strictly beats it.
    ///
    /// Returns true when the value changed (and therefore needs persisting).
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score.min(MAX_SCORE);
            true
        } else {
            false
        }
    }
}

/// Persistent storage for the high score.
pub trait HighScoreStore {
    type Error: fmt::Display;

    fn load(&mut self) -> Result<u32, Self::Error>;
    fn save(&mut self, value: u32) -> Result<(), Self::Error>;
}

/// In-memory store; counts writes so callers can assert persistence happened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: u32,
    pub saves: u32,
}

impl MemoryStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn load(&mut self) -> Result<u32, Self::Error> {
        Ok(self.value)
    }

    fn save(&mut self, value: u32) -> Result<(), Self::Error> {
        self.value = value;
        self.saves += 1;
        Ok(())
    }
}

/// Fire-and-forget audio output.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Audio sink that drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

impl AudioSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}
