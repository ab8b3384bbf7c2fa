//! Session - one playthrough
//!
//! Owns the falling blocks, the score and the spawn counter. Each call to
//! [`Session::tick`] spawns, moves and checks blocks; [`Session::resolve_click`]
//! removes at most one block under the pointer.

use rand_pcg::Pcg32;

use crate::block::Block;
use crate::spawner::{self, SpawnRandom};
use crate::types::{DifficultyProfile, HitResult, Point, TickResult, FIELD_HEIGHT, MAX_SCORE};

#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    profile: DifficultyProfile,
    score: u32,
    blocks: Vec<Block>,
    spawn_tick_counter: u32,
    ticks_per_spawn_cycle: u32,
    /// Lost blocks are discarded instead of ending the round.
    invincible: bool,
    /// Ticks since the session started.
    ticks: u64,
    rng: R,
}

impl<R: SpawnRandom> Session<R> {
    pub fn new(profile: DifficultyProfile, rng: R) -> Self {
        Self {
            profile,
            score: 0,
            blocks: Vec::with_capacity(32),
            spawn_tick_counter: 0,
            ticks_per_spawn_cycle: profile.ticks_per_spawn_cycle(),
            invincible: false,
            ticks: 0,
            rng,
        }
    }

    pub fn with_invincible(mut self, invincible: bool) -> Self {
        self.invincible = invincible;
        self
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn spawn_tick_counter(&self) -> u32 {
        self.spawn_tick_counter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn invincible(&self) -> bool {
        self.invincible
    }

    pub fn set_invincible(&mut self, invincible: bool) {
        self.invincible = invincible;
    }

    /// Advance the simulation by one fixed tick.
    pub fn tick(&mut self) -> TickResult {
        self.ticks += 1;

        let lanes = spawner::advance(
            &mut self.spawn_tick_counter,
            self.ticks_per_spawn_cycle,
            &mut self.rng,
        );
        self.blocks.extend(lanes.into_iter().map(Block::new));

        for block in &mut self.blocks {
            block.advance(&self.profile);
        }

        if self.invincible {
            let profile = self.profile;
            self.blocks.retain(|b| !b.is_lost(&profile));
            return TickResult::Continue;
        }

        // First breaching block in spawn order ends the round.
        if self.blocks.iter().any(|b| b.is_lost(&self.profile)) {
            return TickResult::Lost;
        }

        TickResult::Continue
    }

    /// Hit-test a pointer press (playfield coordinates, y growing down).
    pub fn resolve_click(&mut self, pointer: Point) -> HitResult {
        let y_from_bottom = FIELD_HEIGHT - pointer.y;

        let Some(index) = self
            .blocks
            .iter()
            .position(|b| b.contains(pointer.x, y_from_bottom, &self.profile))
        else {
            return HitResult::Miss;
        };

        self.blocks.remove(index);
        self.score = (self.score + 1).min(MAX_SCORE);
        HitResult::Hit(self.score)
    }

    /// Test hook: place a block directly.
    #[doc(hidden)]
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}
