use crate::block::Block;
use crate::types::Phase;

/// Everything the renderer needs for one frame.
///
/// Borrowed from the controller; nothing here is owned by the frontend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState<'a> {
    pub phase: Phase,
    pub blocks: &'a [Block],
    pub block_height: f64,
    pub score: u32,
    pub high_score: u32,
    /// Title prompt visibility.
    pub blink_visible: bool,
    pub invincible: bool,
}

impl FrameState<'_> {
    /// Cheap fingerprint of what is on screen, for skipping identical redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x100000001b3);
        };
        mix(self.phase as u64);
        mix(self.score as u64);
        mix(self.high_score as u64);
        mix(self.blink_visible as u64);
        mix(self.invincible as u64);
        for b in self.blocks {
            mix(b.lane().index() as u64);
            mix(b.bottom_offset().to_bits());
        }
        h
    }
}
