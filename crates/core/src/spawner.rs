//! Spawner - decides which lanes receive new blocks
//!
//! Once per spawn cycle the spawner draws up to four lanes, stopping after
//! each draw with probability 0.75. That yields one lane most of the time and
//! progressively rarer bursts of two, three or four. Repeated lanes within a
//! cycle collapse to one block.
//!
//! Randomness comes in through [`SpawnRandom`] so a fixed sequence can drive
//! the spawner in tests.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::{Lane, LANE_COUNT, SPAWN_STOP_PROBABILITY};

/// Lanes picked in one spawn cycle (at most one entry per lane after dedup).
pub type LaneSet = ArrayVec<Lane, { LANE_COUNT as usize }>;

/// Random source used for spawning.
pub trait SpawnRandom {
    /// A uniformly distributed lane.
    fn next_lane(&mut self) -> Lane;
    /// A uniformly distributed value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> SpawnRandom for R {
    fn next_lane(&mut self) -> Lane {
        Lane::ALL[self.random_range(0..LANE_COUNT as usize)]
    }

    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Production RNG for a session.
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed sequence of lanes and stop draws.
///
/// Once a queue runs dry it yields lane 0 and `0.0` (which always stops sampling).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    lanes: VecDeque<u8>,
    units: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(lanes: &[u8], units: &[f64]) -> Self {
        Self {
            lanes: lanes.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }

    /// Queue one spawn cycle: `lanes` drawn in order, sampling continuing
    /// between them and stopping after the last.
    pub fn push_cycle(&mut self, lanes: &[u8]) {
        for (i, &lane) in lanes.iter().enumerate() {
            self.lanes.push_back(lane);
            let last = i + 1 == lanes.len();
            self.units.push_back(if last { 0.0 } else { 0.99 });
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.lanes.is_empty() && self.units.is_empty()
    }
}

impl SpawnRandom for ScriptedRandom {
    fn next_lane(&mut self) -> Lane {
        let index = self.lanes.pop_front().unwrap_or(0) % LANE_COUNT;
        Lane::ALL[index as usize]
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

/// Draw candidate lanes for one cycle, before deduplication.
pub fn sample_lanes<R: SpawnRandom + ?Sized>(rng: &mut R) -> LaneSet {
    let mut drawn = LaneSet::new();
    while !drawn.is_full() {
        drawn.push(rng.next_lane());
        if rng.next_unit() < SPAWN_STOP_PROBABILITY {
            break;
        }
    }
    drawn
}

/// Drop repeated lanes, keeping first-seen order.
pub fn dedup_lanes(drawn: &LaneSet) -> LaneSet {
    let mut out = LaneSet::new();
    for &lane in drawn {
        if !out.contains(&lane) {
            out.push(lane);
        }
    }
    out
}

/// Advance the spawn counter by one tick.
///
/// Returns the lanes that get a new block this tick (usually none).
pub fn advance<R: SpawnRandom + ?Sized>(counter: &mut u32, cycle: u32, rng: &mut R) -> LaneSet {
    *counter += 1;
    if *counter < cycle {
        return LaneSet::new();
    }
    *counter = 0;
    dedup_lanes(&sample_lanes(rng))
}
