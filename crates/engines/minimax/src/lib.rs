//! Minimax Connect Four Engine
//!
//! Depth-limited minimax with alpha-beta pruning over the positional
//! evaluator. This is the engine the interactive game plays against.

use connect4_core::{Board, DIFFICULTY, Engine, SearchResult, Searcher};

/// Connect Four engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning
/// - Center-column and four-cell window evaluation at the horizon
/// - Random tie-breaking among equally scored columns (seedable)
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    searcher: Searcher,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// An engine whose tie-breaks repeat from run to run.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            searcher: Searcher::with_seed(seed),
        }
    }

    /// Picks a move at the standard difficulty.
    pub fn search_default(&mut self, board: &Board) -> SearchResult {
        self.search(board, DIFFICULTY)
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.searcher.reset_nodes();

        match self.searcher.choose_move(board, depth) {
            Ok((column, score)) => {
                tracing::debug!(
                    column,
                    score,
                    depth,
                    nodes = self.searcher.nodes(),
                    "minimax move"
                );
                SearchResult {
                    best_column: Some(column),
                    score,
                    depth,
                    nodes: self.searcher.nodes(),
                }
            }
            Err(err) => {
                tracing::debug!(%err, "minimax found no move");
                SearchResult::no_move(depth)
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.searcher.reset_nodes();
    }
}
