//! Terminal bell audio.

use std::io::{self, Write};

use crate::core::AudioSink;
use crate::types::SoundCue;

/// Rings the terminal bell for each cue. Disabled instances stay silent.
#[derive(Debug)]
pub struct BellAudio {
    enabled: bool,
    played: u64,
}

impl BellAudio {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, played: 0 }
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for BellAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("sound cue {}", cue.as_str());
        if !self.enabled {
            return;
        }
        self.played += 1;
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            log::warn!("bell failed: {}", e);
        }
    }
}
