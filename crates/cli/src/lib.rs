//! # Connect Four in the terminal
//!
//! Everything the `connect4` binary needs around the engine: the live game
//! session, configuration loading, and prompt parsing.
//!
//! - [`session`]: Board, turn and outcome of the game being played
//! - [`config`]: TOML configuration loading and validation
//! - [`prompt`]: Reading the player's column choice

pub mod config;
pub mod prompt;
pub mod session;

pub use config::{Config, ConfigError, FirstMove};
pub use prompt::{Command, PromptError, parse_command};
pub use session::{GameSession, GameStatus, SessionError};
