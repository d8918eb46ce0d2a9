use crate::types::Piece;

/// A move or placement that breaks the board's rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (0..7)")]
    ColumnOutOfRange { column: usize },

    #[error("cell ({row}, {column}) is outside the 6x7 board")]
    OutOfBounds { row: usize, column: usize },

    #[error("cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },
}

/// Failure to pick a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no valid moves: the board is full")]
    NoValidMoves,

    #[error("game is already over: {winner:?} has four in a row")]
    GameOver { winner: Piece },

    #[error("search depth must be at least 1")]
    InvalidDepth,
}

/// Failure to read a text board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    RowLength { row: usize, len: usize },

    #[error("unknown cell character {ch:?} in row {row}")]
    UnknownCell { row: usize, ch: char },

    #[error("floating piece at ({row}, {column}): the cell below is empty")]
    FloatingPiece { row: usize, column: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");

        let err = MoveError::ColumnOutOfRange { column: 9 };
        assert_eq!(err.to_string(), "column 9 is out of range (0..7)");
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::NoValidMoves.to_string(),
            "no valid moves: the board is full"
        );
        assert_eq!(
            SearchError::GameOver { winner: Piece::Ai }.to_string(),
            "game is already over: Ai has four in a row"
        );
    }
}
