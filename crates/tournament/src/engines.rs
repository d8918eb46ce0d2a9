//! Engine lookup by name for the command line.

use connect4_core::Engine;
use greedy_engine::GreedyEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

/// Engine names accepted by [`create_engine`].
pub const ENGINE_NAMES: [&str; 3] = ["minimax", "greedy", "random"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown engine '{0}' (expected one of: minimax, greedy, random)")]
pub struct UnknownEngine(pub String);

/// Builds an engine from its name. `seed` fixes random tie-breaks and moves.
pub fn create_engine(name: &str, seed: Option<u64>) -> Result<Box<dyn Engine>, UnknownEngine> {
    let engine: Box<dyn Engine> = match name.to_lowercase().as_str() {
        "minimax" | "alphabeta" => match seed {
            Some(seed) => Box::new(MinimaxEngine::with_seed(seed)),
            None => Box::new(MinimaxEngine::new()),
        },
        "greedy" => Box::new(GreedyEngine::new()),
        "random" => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
        _ => return Err(UnknownEngine(name.to_string())),
    };
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_engines() {
        for name in ENGINE_NAMES {
            assert!(create_engine(name, Some(1)).is_ok(), "{name}");
        }
        assert_eq!(create_engine("Minimax", None).unwrap().name(), "Minimax v1.0");
    }

    #[test]
    fn test_unknown_engine() {
        let err = create_engine("stockfish", None).err().unwrap();
        assert_eq!(err, UnknownEngine("stockfish".into()));
        assert!(err.to_string().contains("stockfish"));
    }
}
