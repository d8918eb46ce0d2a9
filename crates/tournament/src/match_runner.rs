//! Match runner for playing games between engines

use connect4_core::{Board, Engine, Piece, is_terminal, winner};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Whether to alternate who moves first each game
    pub alternate_first: bool,
    /// Log each game at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 5,
            alternate_first: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let game_result = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(game_result);

            if self.config.verbose {
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                tracing::info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    first = if engine1_first { engine1.name() } else { engine2.name() },
                    outcome,
                    score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                    "game finished"
                );
            }
        }

        result
    }

    /// Play a single game, returns result from the first mover's perspective.
    ///
    /// The first mover's pieces are `Piece::Ai` on the shared board; the
    /// second engine is shown the swapped board so it also plays as the AI.
    /// An engine that fails to produce a legal column forfeits.
    pub fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> GameResult {
        let mut board = Board::new();
        first.new_game();
        second.new_game();

        let mut mover = Piece::Ai;
        while !is_terminal(&board) {
            let result = match mover {
                Piece::Ai => first.search(&board, self.config.depth),
                Piece::Player => second.search(&board.swapped(), self.config.depth),
            };

            let placed = result.best_column.map(|col| board.drop_piece(col, mover));
            if !matches!(placed, Some(Ok(_))) {
                let name = match mover {
                    Piece::Ai => first.name(),
                    Piece::Player => second.name(),
                };
                tracing::warn!(
                    engine = name,
                    column = ?result.best_column,
                    "engine forfeits: no legal move"
                );
                return match mover {
                    Piece::Ai => GameResult::Loss,
                    Piece::Player => GameResult::Win,
                };
            }
            mover = mover.other();
        }

        match winner(&board) {
            Some(Piece::Ai) => GameResult::Win,
            Some(Piece::Player) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
