use std::path::{Path, PathBuf};

use connect4_core::{DIFFICULTY, Piece};
use rand::Rng;

/// Deepest search the front end allows. Depth 10 already takes seconds.
pub const MAX_DIFFICULTY: u8 = 10;

/// Who drops the first piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstMove {
    Player,
    Ai,
    /// Coin flip at the start of the game
    Random,
}

impl FirstMove {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Piece {
        match self {
            FirstMove::Player => Piece::Player,
            FirstMove::Ai => Piece::Ai,
            FirstMove::Random => {
                if rng.gen_bool(0.5) {
                    Piece::Ai
                } else {
                    Piece::Player
                }
            }
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search depth in plies for the computer's moves
    pub difficulty: u8,
    pub first_move: FirstMove,
    /// Fixes the first mover and the engine's tie-breaks
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            difficulty: DIFFICULTY,
            first_move: FirstMove::Random,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.difficulty == 0 {
            return Err(ConfigError::Validation("difficulty must be >= 1".into()));
        }
        if self.difficulty > MAX_DIFFICULTY {
            return Err(ConfigError::Validation(format!(
                "difficulty must be <= {MAX_DIFFICULTY}"
            )));
        }
        Ok(())
    }

    /// TOML text with every default filled in.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.difficulty, 7);
        assert_eq!(config.first_move, FirstMove::Random);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("first_move = \"ai\"").unwrap();
        assert_eq!(config.first_move, FirstMove::Ai);
        assert_eq!(config.difficulty, DIFFICULTY);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validation_rejects_zero_difficulty() {
        let config = Config {
            difficulty: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_deep_difficulty() {
        let config = Config {
            difficulty: MAX_DIFFICULTY + 1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: difficulty must be <= 10"
        );
    }

    #[test]
    fn test_unknown_first_move_is_a_parse_error() {
        let err = toml::from_str::<Config>("first_move = \"both\"").unwrap_err();
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("nonexistent_connect4.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "difficulty = 4\nseed = 99").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.difficulty, 4);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.first_move, FirstMove::Random);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        std::fs::write(&path, "difficulty = 0").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let text = Config::default_toml().unwrap();
        let config: Config = toml::from_str(&text).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_first_move_resolution() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(FirstMove::Player.resolve(&mut rng), Piece::Player);
        assert_eq!(FirstMove::Ai.resolve(&mut rng), Piece::Ai);

        let picks: Vec<Piece> = (0..64).map(|_| FirstMove::Random.resolve(&mut rng)).collect();
        assert!(picks.contains(&Piece::Ai));
        assert!(picks.contains(&Piece::Player));
    }
}
