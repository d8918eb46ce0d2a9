//! Static evaluation used at the search horizon.

use crate::board::{Board, Window};
use crate::types::*;

/// Bonus per own piece in the center column.
pub const CENTER_WEIGHT: i32 = 6;
/// Window of four own pieces.
pub const FOUR_SCORE: i32 = 100;
/// Three own pieces and a gap.
pub const THREE_SCORE: i32 = 10;
/// Two own pieces and two gaps.
pub const TWO_SCORE: i32 = 4;
/// Three opponent pieces and a gap. Smaller in magnitude than
/// [`THREE_SCORE`]; keep the two apart.
pub const OPPONENT_THREE_PENALTY: i32 = -8;

/// Scores `board` from `piece`'s point of view.
///
/// Higher is better for `piece`. The value only means something relative to
/// other boards scored in the same search; won positions are handled by the
/// search itself.
pub fn evaluate(board: &Board, piece: Piece) -> i32 {
    let center = board
        .column(CENTER_COL)
        .iter()
        .filter(|&&cell| cell == Some(piece))
        .count() as i32;

    let windows: i32 = board.windows().map(|w| window_score(&w, piece)).sum();

    center * CENTER_WEIGHT + windows
}

/// Scores a single window of four cells for `piece`.
pub fn window_score(window: &Window, piece: Piece) -> i32 {
    let own = count(window, Some(piece));
    let opponent = count(window, Some(piece.other()));
    let empty = count(window, None);

    let mut score = match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    };
    if opponent == 3 && empty == 1 {
        score += OPPONENT_THREE_PENALTY;
    }
    score
}

#[inline]
fn count(window: &Window, cell: Option<Piece>) -> usize {
    window.iter().filter(|&&c| c == cell).count()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
