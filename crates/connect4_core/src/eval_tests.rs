use super::*;

const AI: Option<Piece> = Some(Piece::Ai);
const PL: Option<Piece> = Some(Piece::Player);

#[test]
fn test_window_scores() {
    assert_eq!(window_score(&[AI, AI, AI, AI], Piece::Ai), 100);
    assert_eq!(window_score(&[AI, AI, None, AI], Piece::Ai), 10);
    assert_eq!(window_score(&[None, AI, AI, None], Piece::Ai), 4);
    assert_eq!(window_score(&[AI, None, None, None], Piece::Ai), 0);
    // Blocked windows are worth nothing
    assert_eq!(window_score(&[AI, AI, AI, PL], Piece::Ai), 0);
    assert_eq!(window_score(&[AI, AI, PL, None], Piece::Ai), 0);
}

#[test]
fn test_opponent_threat_is_penalised_less_than_own_threat() {
    let window = [AI, AI, AI, None];
    assert_eq!(window_score(&window, Piece::Ai), 10);
    assert_eq!(window_score(&window, Piece::Player), -8);
    assert_ne!(window_score(&window, Piece::Player), -window_score(&window, Piece::Ai));
}

#[test]
fn test_opponent_four_is_not_penalised() {
    assert_eq!(window_score(&[PL, PL, PL, PL], Piece::Ai), 0);
}

#[test]
fn test_empty_board_scores_zero() {
    let board = Board::new();
    assert_eq!(evaluate(&board, Piece::Ai), 0);
    assert_eq!(evaluate(&board, Piece::Player), 0);
}

#[test]
fn test_center_bonus() {
    let mut board = Board::new();
    board.drop_piece(CENTER_COL, Piece::Ai).unwrap();
    assert_eq!(evaluate(&board, Piece::Ai), 6);
    assert_eq!(evaluate(&board, Piece::Player), 0);

    let mut edge = Board::new();
    edge.drop_piece(0, Piece::Ai).unwrap();
    assert_eq!(evaluate(&edge, Piece::Ai), 0);
}

#[test]
fn test_evaluation_is_not_antisymmetric() {
    // [O O O .] plus [O O . .] along the bottom row
    let board = Board::from_rows(&[
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "OOO....",
    ])
    .unwrap();
    assert_eq!(evaluate(&board, Piece::Ai), 14);
    assert_eq!(evaluate(&board, Piece::Player), -8);

    // Swapping colours and perspective together gives the same number back
    assert_eq!(evaluate(&board.swapped(), Piece::Player), 14);
}

#[test]
fn test_mixed_position() {
    let board = Board::from_rows(&[
        ".......",
        ".......",
        ".......",
        "O......",
        "OX.....",
        "OXX.X..",
    ])
    .unwrap();
    assert_eq!(evaluate(&board, Piece::Ai), 6);
    assert_eq!(evaluate(&board, Piece::Player), 10);

    let board = Board::from_rows(&[
        ".......",
        ".......",
        ".......",
        "...O...",
        "..XX...",
        "..OXO..",
    ])
    .unwrap();
    assert_eq!(evaluate(&board, Piece::Ai), 6);
    assert_eq!(evaluate(&board, Piece::Player), 28);
}
