//! Minimax search with alpha-beta pruning.
//!
//! Scores are always from the AI's point of view: the AI maximizes, the
//! player minimizes. Every explored move is played on a private copy of the
//! board, so sibling branches never see each other's pieces.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::board::Board;
use crate::error::SearchError;
use crate::eval::evaluate;
use crate::rules::winner;
use crate::types::*;

/// Runs searches and keeps the state they share: the tie-break RNG and a
/// node counter for statistics.
#[derive(Debug, Clone)]
pub struct Searcher {
    rng: StdRng,
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// A searcher whose tie-breaks are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Nodes visited since the last [`Searcher::reset_nodes`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Picks the AI's move with a full-window search of `depth` plies.
    ///
    /// # Returns
    /// The chosen column and its backed-up score. `SCORE_INFINITY` means a
    /// forced win for the AI within the horizon.
    pub fn choose_move(&mut self, board: &Board, depth: u8) -> Result<(usize, i32), SearchError> {
        if depth == 0 {
            return Err(SearchError::InvalidDepth);
        }
        if let Some(winner) = winner(board) {
            return Err(SearchError::GameOver { winner });
        }

        let (column, score) = self.minimax(board, depth, -SCORE_INFINITY, SCORE_INFINITY, true);
        let column = column.ok_or(SearchError::NoValidMoves)?;

        tracing::trace!(column, score, depth, nodes = self.nodes, "search finished");
        Ok((column, score))
    }

    /// One minimax node.
    ///
    /// Returns `(None, score)` at terminal and horizon nodes, otherwise the
    /// best column for the side to move together with its score.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<usize>, i32) {
        self.nodes += 1;

        match winner(board) {
            Some(Piece::Ai) => return (None, SCORE_INFINITY),
            Some(Piece::Player) => return (None, -SCORE_INFINITY),
            None if board.is_full() => return (None, 0),
            None => {}
        }
        if depth == 0 {
            return (None, evaluate(board, Piece::Ai));
        }

        let valid = board.valid_locations();
        let mover = if maximizing { Piece::Ai } else { Piece::Player };

        // Random default, replaced by the first strictly better child
        let mut column = valid.choose(&mut self.rng).copied();
        let mut value = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        for (col, child) in board.successors(mover) {
            let (_, score) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > value {
                    value = score;
                    column = Some(col);
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = Some(col);
                }
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        (column, value)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the AI's move at the default [`DIFFICULTY`].
pub fn choose_ai_move(board: &Board) -> Result<(usize, i32), SearchError> {
    choose_ai_move_with_depth(board, DIFFICULTY)
}

/// Picks the AI's move searching `depth` plies.
pub fn choose_ai_move_with_depth(board: &Board, depth: u8) -> Result<(usize, i32), SearchError> {
    Searcher::new().choose_move(board, depth)
}

/// Stand-alone minimax call with a fresh searcher.
pub fn minimax(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> (Option<usize>, i32) {
    Searcher::new().minimax(board, depth, alpha, beta, maximizing)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
