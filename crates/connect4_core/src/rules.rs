//! Win and game-end detection.

use crate::board::{Board, Window};
use crate::types::Piece;

/// True if `piece` has four in a row anywhere on the board.
///
/// Lines are scanned horizontally, vertically, then along both diagonals,
/// stopping at the first match.
pub fn winning_move(board: &Board, piece: Piece) -> bool {
    board.windows().any(|w| is_line_of(&w, piece))
}

/// The side with four in a row, if any. The AI is checked first.
pub fn winner(board: &Board) -> Option<Piece> {
    [Piece::Ai, Piece::Player]
        .into_iter()
        .find(|&piece| winning_move(board, piece))
}

/// A decided game (either side has won) or a full board.
pub fn is_terminal(board: &Board) -> bool {
    winning_move(board, Piece::Player) || winning_move(board, Piece::Ai) || board.is_full()
}

#[inline]
fn is_line_of(window: &Window, piece: Piece) -> bool {
    window.iter().all(|&cell| cell == Some(piece))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
