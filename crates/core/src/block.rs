//! Falling block.

use crate::types::{DifficultyProfile, Lane, FIELD_HEIGHT, LANE_WIDTH};

/// A block falling through one lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    lane: Lane,
    /// Distance fallen since spawn. Never decreases.
    bottom_offset: f64,
}

impl Block {
    /// Create a block at the top spawn edge (fully above the visible field).
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            bottom_offset: 0.0,
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Left edge in playfield units; fixed for the block's lifetime.
    pub fn horizontal_position(&self) -> f64 {
        self.lane.horizontal_position()
    }

    pub fn bottom_offset(&self) -> f64 {
        self.bottom_offset
    }

    /// Height of the block's lower edge above the playfield floor.
    pub fn bottom(&self) -> f64 {
        FIELD_HEIGHT - self.bottom_offset
    }

    /// Descend by one tick's worth of travel.
    pub fn advance(&mut self, profile: &DifficultyProfile) {
        debug_assert!(profile.fall_rate > 0.0);
        self.bottom_offset += profile.fall_rate;
    }

    /// True once the next step would put the lower edge on or below the floor.
    pub fn is_lost(&self, profile: &DifficultyProfile) -> bool {
        self.bottom() <= profile.fall_rate
    }

    /// Hit test in floor-relative coordinates (`y` measured up from the floor).
    ///
    /// Both spans are inclusive.
    pub fn contains(&self, x: f64, y_from_bottom: f64, profile: &DifficultyProfile) -> bool {
        let left = self.horizontal_position();
        let bottom = self.bottom();
        (left..=left + LANE_WIDTH).contains(&x)
            && (bottom..=bottom + profile.block_height).contains(&y_from_bottom)
    }
}
