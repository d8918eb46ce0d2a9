//! Greedy Connect Four Engine
//!
//! Looks one move ahead and plays the column whose resulting board scores
//! best. A baseline the minimax engine should beat comfortably.

use connect4_core::{Board, Engine, Piece, SearchResult, best_move_with_score};

/// Engine that plays the best immediate evaluation. Ignores search depth.
#[derive(Debug, Clone, Default)]
pub struct GreedyEngine {
    nodes: u64,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for GreedyEngine {
    fn search(&mut self, board: &Board, _depth: u8) -> SearchResult {
        let Ok((column, score)) = best_move_with_score(board, Piece::Ai) else {
            return SearchResult::no_move(1);
        };
        self.nodes = board.valid_locations().len() as u64;
        tracing::debug!(column, score, "greedy move");

        SearchResult {
            best_column: Some(column),
            score,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
