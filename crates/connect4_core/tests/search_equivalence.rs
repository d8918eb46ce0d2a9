//! Alpha-beta pruning must not change the value of the root.
//!
//! Each board is searched twice: once by `Searcher::minimax` and once by a
//! plain minimax that visits every node. Boards come from seeded random
//! play so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use connect4_core::{Board, Piece, SCORE_INFINITY, Searcher, evaluate, is_terminal, winner};

const BOARD_COUNT: u64 = 48;
const MAX_DEPTH: u8 = 4;

fn plain_minimax(board: &Board, depth: u8, maximizing: bool) -> i32 {
    match winner(board) {
        Some(Piece::Ai) => return SCORE_INFINITY,
        Some(Piece::Player) => return -SCORE_INFINITY,
        None if board.is_full() => return 0,
        None => {}
    }
    if depth == 0 {
        return evaluate(board, Piece::Ai);
    }

    let mover = if maximizing { Piece::Ai } else { Piece::Player };
    let scores = board.valid_locations().into_iter().map(|col| {
        let mut child = *board;
        child.drop_piece(col, mover).unwrap();
        plain_minimax(&child, depth - 1, !maximizing)
    });

    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

/// Plays random moves from the empty board, backing off to the previous
/// position if the game ends.
fn random_midgame(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = rng.gen_range(4..24);

    let mut board = Board::new();
    let mut mover = if rng.gen_bool(0.5) { Piece::Ai } else { Piece::Player };
    for _ in 0..plies {
        let valid = board.valid_locations();
        let col = valid[rng.gen_range(0..valid.len())];
        let mut next = board;
        next.drop_piece(col, mover).unwrap();
        if is_terminal(&next) {
            break;
        }
        board = next;
        mover = mover.other();
    }
    board
}

#[test]
fn alpha_beta_matches_plain_minimax() {
    let boards: Vec<(u64, Board)> = (0..BOARD_COUNT).map(|s| (s, random_midgame(s))).collect();

    boards.par_iter().for_each(|(seed, board)| {
        for depth in 1..=MAX_DEPTH {
            for maximizing in [true, false] {
                let expected = plain_minimax(board, depth, maximizing);
                let (_, actual) = Searcher::with_seed(*seed).minimax(
                    board,
                    depth,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                    maximizing,
                );
                assert_eq!(
                    actual, expected,
                    "seed {seed}, depth {depth}, maximizing {maximizing}\n{board}"
                );
            }
        }
    });
}

#[test]
fn chosen_column_achieves_the_root_value() {
    for seed in 0..16 {
        let board = random_midgame(seed);
        let (col, score) = Searcher::with_seed(seed).choose_move(&board, 3).unwrap();

        let mut child = board;
        child.drop_piece(col, Piece::Ai).unwrap();
        assert_eq!(plain_minimax(&child, 2, false), score, "seed {seed}\n{board}");
    }
}
