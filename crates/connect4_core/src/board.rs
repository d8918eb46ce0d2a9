use std::fmt;
use std::str::FromStr;

use crate::error::{BoardParseError, MoveError};
use crate::types::*;

/// Four consecutive cells along one direction.
pub type Window = [Option<Piece>; CONNECT];

/// The 6x7 grid. `cells[0]` is the bottom row; pieces stack upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; COLS]; ROWS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Builds a board from a diagram, top row first.
    ///
    /// `.` is empty, `X` the player, `O` the AI. Whitespace inside a row is
    /// ignored so rows may be written as `". . X O . . ."` or `"..XO..."`.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut cells = [[None; COLS]; ROWS];
        for (i, text) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != COLS {
                return Err(BoardParseError::RowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                cells[row][col] = match ch {
                    '.' => None,
                    _ => Some(
                        Piece::from_symbol(ch).ok_or(BoardParseError::UnknownCell { row, ch })?,
                    ),
                };
            }
        }

        for col in 0..COLS {
            for row in 1..ROWS {
                if cells[row][col].is_some() && cells[row - 1][col].is_none() {
                    return Err(BoardParseError::FloatingPiece { row, column: col });
                }
            }
        }

        Ok(Board { cells })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells[row][col]
    }

    /// True if a piece can be dropped into `col` (its top cell is empty).
    /// Columns outside the board are never valid.
    #[inline]
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col].is_none()
    }

    /// Lowest empty row of `col`, where a dropped piece comes to rest.
    pub fn landing_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange { column: col });
        }
        (0..ROWS)
            .find(|&row| self.cells[row][col].is_none())
            .ok_or(MoveError::ColumnFull { column: col })
    }

    /// Writes `piece` into a cell.
    ///
    /// Gravity is not re-checked: callers get `row` from [`Board::landing_row`].
    /// Writing outside the board or over another piece is an error.
    pub fn set_piece(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), MoveError> {
        if row >= ROWS || col >= COLS {
            return Err(MoveError::OutOfBounds { row, column: col });
        }
        if self.cells[row][col].is_some() {
            return Err(MoveError::CellOccupied { row, column: col });
        }
        self.cells[row][col] = Some(piece);
        Ok(())
    }

    /// Drops `piece` into `col` and returns the row it landed on.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        let row = self.landing_row(col)?;
        self.set_piece(row, col, piece)?;
        Ok(row)
    }

    /// Playable columns in ascending order. Empty when the board is full.
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Every legal move for `piece` paired with the board it leads to, in
    /// column order.
    pub fn successors(&self, piece: Piece) -> impl Iterator<Item = (usize, Board)> + '_ {
        (0..COLS).filter_map(move |col| {
            let row = (0..ROWS).find(|&row| self.cells[row][col].is_none())?;
            let mut child = *self;
            child.cells[row][col] = Some(piece);
            Some((col, child))
        })
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_move(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Cells of one column, bottom first.
    pub fn column(&self, col: usize) -> [Option<Piece>; ROWS] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// The same position with every player piece turned into an AI piece and
    /// vice versa.
    pub fn swapped(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut().flatten() {
            *cell = cell.map(Piece::other);
        }
        Board { cells }
    }

    /// Every window along `dir`.
    pub fn windows_in(&self, dir: Direction) -> impl Iterator<Item = Window> + '_ {
        let (rows, cols) = dir.starts();
        let (dr, dc) = dir.step();
        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
            .map(move |(r, c)| -> Window {
                std::array::from_fn(|i| {
                    let row = (r as isize + dr * i as isize) as usize;
                    let col = (c as isize + dc * i as isize) as usize;
                    self.cells[row][col]
                })
            })
    }

    /// Every window on the board: horizontal, vertical, then both diagonals.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        Direction::ALL
            .into_iter()
            .flat_map(move |dir| self.windows_in(dir))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<String> = self.cells[row]
                .iter()
                .map(|cell| cell.map_or('.', Piece::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the [`Display`](fmt::Display) format. Blank lines and a
    /// column-number footer are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()))
            .collect();
        Board::from_rows(&rows)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
