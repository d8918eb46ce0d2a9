pub mod board;
pub mod error;
pub mod eval;
pub mod greedy;
pub mod rules;
pub mod search;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::{evaluate, window_score};
pub use greedy::{best_move_with_score, select_best_move};
pub use rules::*;
pub use search::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-picking strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen column (None if the game is over or the board is full)
    pub best_column: Option<usize>,
    /// Score from the engine's perspective; `SCORE_INFINITY` is a forced win
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// A result carrying no move.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_column: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all Connect Four engines must implement.
///
/// Engines always move as [`Piece::Ai`]. To have an engine play the other
/// side, pass it [`Board::swapped`].
pub trait Engine: Send {
    /// Search the board and pick a column.
    ///
    /// # Arguments
    /// * `board` - The position to move in, with the engine's pieces as `Piece::Ai`
    /// * `depth` - Search depth in plies (engines that do not search ignore it)
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
