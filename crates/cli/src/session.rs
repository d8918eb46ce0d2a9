//! The one live game: board, side to move, and outcome.

use connect4_core::{Board, Engine, MoveError, Piece, winning_move};

/// Where the game stands after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Piece },
    Won(Piece),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is not {attempted:?}'s turn")]
    NotYourTurn { attempted: Piece },

    #[error("the game is already over")]
    GameOver,

    #[error("the engine returned no move")]
    EngineNoMove,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// A game between the human ([`Piece::Player`]) and an engine ([`Piece::Ai`]).
///
/// The board only changes through [`GameSession::play_human`] and
/// [`GameSession::play_ai`], and only after the move is known to be legal.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
    moves: u32,
}

impl GameSession {
    pub fn new(first: Piece) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress { to_move: first },
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of pieces dropped so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn to_move(&self) -> Option<Piece> {
        match self.status {
            GameStatus::InProgress { to_move } => Some(to_move),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.to_move().is_none()
    }

    /// Drops the human's piece in `col`. Returns the row it landed on.
    pub fn play_human(&mut self, col: usize) -> Result<usize, SessionError> {
        self.play(Piece::Player, col)
    }

    /// Lets `engine` pick and play the computer's move. Returns the column.
    pub fn play_ai(&mut self, engine: &mut dyn Engine, depth: u8) -> Result<usize, SessionError> {
        self.check_turn(Piece::Ai)?;

        let result = engine.search(&self.board, depth);
        let col = result.best_column.ok_or(SessionError::EngineNoMove)?;
        tracing::debug!(
            engine = engine.name(),
            col,
            score = result.score,
            nodes = result.nodes,
            "engine answered"
        );

        self.play(Piece::Ai, col)?;
        Ok(col)
    }

    fn check_turn(&self, piece: Piece) -> Result<(), SessionError> {
        match self.status {
            GameStatus::InProgress { to_move } if to_move == piece => Ok(()),
            GameStatus::InProgress { .. } => Err(SessionError::NotYourTurn { attempted: piece }),
            _ => Err(SessionError::GameOver),
        }
    }

    fn play(&mut self, piece: Piece, col: usize) -> Result<usize, SessionError> {
        self.check_turn(piece)?;

        let row = self.board.drop_piece(col, piece)?;
        self.moves += 1;
        tracing::info!(?piece, col, row, moves = self.moves, "move played");

        self.status = if winning_move(&self.board, piece) {
            GameStatus::Won(piece)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                to_move: piece.other(),
            }
        };

        match self.status {
            GameStatus::Won(winner) => tracing::info!(?winner, moves = self.moves, "game won"),
            GameStatus::Draw => tracing::info!(moves = self.moves, "game drawn"),
            GameStatus::InProgress { .. } => {}
        }

        Ok(row)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
