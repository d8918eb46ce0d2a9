/// Number of rows on the board. Row 0 is the bottom.
pub const ROWS: usize = 6;
/// Number of columns on the board.
pub const COLS: usize = 7;
/// Index of the center column.
pub const CENTER_COL: usize = COLS / 2;
/// Pieces in a row needed to win, and the width of a scoring window.
pub const CONNECT: usize = 4;

/// Search depth in plies used for the computer's moves.
pub const DIFFICULTY: u8 = 7;

/// Score standing in for +infinity (a won position for the AI).
/// Negate for -infinity; `-SCORE_INFINITY` does not overflow.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Player,
    Ai,
}

impl Piece {
    pub fn other(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }

    /// Character used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Piece> {
        match ch {
            'X' | 'x' => Some(Piece::Player),
            'O' | 'o' => Some(Piece::Ai),
            _ => None,
        }
    }
}

/// A line direction, in the order win detection scans them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (row step, column step) between consecutive cells of a window.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }

    /// Range of starting rows and columns so that a whole window fits.
    pub(crate) fn starts(self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let span = CONNECT - 1;
        match self {
            Direction::Horizontal => (0..ROWS, 0..COLS - span),
            Direction::Vertical => (0..ROWS - span, 0..COLS),
            Direction::DiagonalUp => (0..ROWS - span, 0..COLS - span),
            Direction::DiagonalDown => (span..ROWS, 0..COLS - span),
        }
    }
}
