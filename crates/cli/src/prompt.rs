//! Parsing what the player types at the move prompt.

use connect4_core::COLS;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Column(usize),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("type a column number from 0 to 6, or q to quit")]
    Empty,

    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {0} is off the board (0..7)")]
    OffBoard(usize),
}

/// Parses a line like `3`, ` 5 ` or `q`.
pub fn parse_command(line: &str) -> Result<Command, PromptError> {
    let input = line.trim();
    if input.is_empty() {
        return Err(PromptError::Empty);
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let col: usize = input
        .parse()
        .map_err(|_| PromptError::NotANumber(input.to_string()))?;
    if col >= COLS {
        return Err(PromptError::OffBoard(col));
    }
    Ok(Command::Column(col))
}
