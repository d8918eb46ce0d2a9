//! One-ply move selection by static evaluation.
//!
//! Weaker than the alpha-beta search; useful as a baseline opponent and for
//! exercising the evaluator on its own.

use crate::board::Board;
use crate::error::SearchError;
use crate::eval::evaluate;
use crate::types::Piece;

/// Returns the column whose resulting board scores highest for `piece`.
/// Ties go to the lowest column.
pub fn select_best_move(board: &Board, piece: Piece) -> Result<usize, SearchError> {
    best_move_with_score(board, piece).map(|(col, _)| col)
}

/// Like [`select_best_move`], also returning the evaluation of the board
/// after the move.
pub fn best_move_with_score(board: &Board, piece: Piece) -> Result<(usize, i32), SearchError> {
    let mut best: Option<(usize, i32)> = None;

    for (col, child) in board.successors(piece) {
        let score = evaluate(&child, piece);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((col, score));
        }
    }

    best.ok_or(SearchError::NoValidMoves)
}
