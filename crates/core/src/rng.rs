//! RNG module - deterministic tile spawning
//!
//! New tiles appear on a uniformly random empty cell. A new tile is a 2,
//! or a 4 with probability `SPAWN_FOUR_PERCENT`.
//!
//! Uses a simple LCG so that a seed fully determines a game.

use crate::board::Board;
use crate::types::{Tile, SPAWN_FOUR_PERCENT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// True with probability `percent / 100`
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

/// Places new tiles on random empty cells
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
}

impl TileSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Value of the next spawned tile: 4 with `SPAWN_FOUR_PERCENT` chance, else 2
    pub fn next_value(&mut self) -> u32 {
        if self.rng.chance(SPAWN_FOUR_PERCENT) {
            4
        } else {
            2
        }
    }

    /// Pick a tile for a random empty cell of `board`
    ///
    /// The tile is not added; the caller decides (see `GameState::add_tile`).
    /// Returns `None` if the board is full.
    pub fn spawn(&mut self, board: &Board) -> Option<Tile> {
        let empty = board.empty_count();
        if empty == 0 {
            return None;
        }
        let pick = self.rng.next_range(empty as u32) as usize;
        let (col, row) = board.nth_empty(pick)?;
        let value = self.next_value();
        Some(Tile::new(value, col, row))
    }
}
