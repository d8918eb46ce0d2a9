use super::*;
use connect4_core::SearchResult;
use greedy_engine::GreedyEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

/// Always asks for column 0, even once it is full.
struct StubbornEngine;

impl Engine for StubbornEngine {
    fn search(&mut self, _board: &Board, depth: u8) -> SearchResult {
        SearchResult {
            best_column: Some(0),
            score: 0,
            depth,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Stubborn"
    }
}

fn quiet(num_games: u32, depth: u8) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    })
}

#[test]
fn test_self_play() {
    let mut engine1 = MinimaxEngine::with_seed(1);
    let mut engine2 = MinimaxEngine::with_seed(2);

    let result = quiet(2, 2).run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_minimax_beats_greedy_moving_first() {
    let mut minimax = MinimaxEngine::with_seed(3);
    let mut greedy = GreedyEngine::new();

    let result = quiet(1, 4).play_game(&mut minimax, &mut greedy);
    assert_eq!(result, GameResult::Win);
}

#[test]
fn test_minimax_beats_random() {
    let mut minimax = MinimaxEngine::with_seed(4);
    let mut random = RandomEngine::with_seed(4);

    let result = quiet(4, 3).run_match(&mut minimax, &mut random);
    assert_eq!(result.total_games(), 4);
    assert!(result.wins >= 3, "{result:?}");
}

#[test]
fn test_illegal_column_forfeits() {
    let mut stubborn = StubbornEngine;
    let mut random = RandomEngine::with_seed(8);

    // Stubborn fills column 0 with both players' pieces, then must forfeit
    // unless someone wins first; either way the game ends.
    let result = quiet(1, 1).play_game(&mut stubborn, &mut StubbornEngine);
    assert_ne!(result, GameResult::Draw);

    let result = quiet(2, 1).run_match(&mut stubborn, &mut random);
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_quick_match_plays_every_game() {
    let mut stubborn = StubbornEngine;
    let mut random = RandomEngine::with_seed(8);

    let result = quick_match(&mut stubborn, &mut random, 3, 1);

    assert_eq!(result.total_games(), 3);
    // Only column 0 is ever played by Stubborn, so no game fills the board
    assert_eq!(result.draws, 0);
}
