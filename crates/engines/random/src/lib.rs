//! Random Move Connect Four Engine
//!
//! Drops a piece into a uniformly random open column.
//! Useful for:
//! - Exercising the tournament runner and front end without search cost
//! - Baseline comparisons (any real engine should easily beat this)

use connect4_core::{Board, Engine, SearchResult, is_terminal};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;


/// An engine that plays random legal columns.
///
/// This engine provides no evaluation - it simply picks a random column
/// from the open ones.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _depth: u8) -> SearchResult {
        if is_terminal(board) {
            return SearchResult::no_move(1);
        }

        self.nodes = 1;
        let best_column = board.valid_locations().choose(&mut self.rng).copied();

        SearchResult {
            best_column,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
