//! Tournament Runner for Connect Four engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Collecting results and writing JSON / text reports
//!
//! # Usage
//!
//! ```bash
//! # Play minimax against the greedy baseline
//! cargo run -p tournament -- match minimax greedy --games 20 --depth 5
//!
//! # Play one engine against every other engine
//! cargo run -p tournament -- gauntlet minimax --games 10 --output gauntlet.json
//! ```

mod engines;
mod match_runner;
mod results;

pub use engines::*;
pub use match_runner::*;
pub use results::*;
