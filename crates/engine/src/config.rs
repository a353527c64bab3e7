//! Game configuration from the environment

use match3_core::Game;
use match3_types::{Size, Types};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::Result;

pub const DEFAULT_TYPES: [&str; 5] = ["red", "green", "blue", "yellow", "purple"];

/// How the simulator prints boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: Size,
    pub types: Vec<String>,
    /// Fixed seed for a reproducible fill. `None` draws from the thread generator.
    pub seed: Option<u64>,
    pub max_cascades: usize,
    pub output: OutputFormat,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Size::new(8, 8),
            types: DEFAULT_TYPES.iter().map(|s| s.to_string()).collect(),
            seed: None,
            max_cascades: 32,
            output: OutputFormat::Text,
        }
    }
}

impl GameConfig {
    /// Read `MATCH3_*` variables. Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let width = lookup("MATCH3_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size.width());
        let height = lookup("MATCH3_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size.height());

        let types = lookup("MATCH3_TYPES")
            .map(|s| {
                s.split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|names| !names.is_empty())
            .unwrap_or(defaults.types);

        let seed = lookup("MATCH3_SEED").and_then(|s| s.trim().parse().ok());

        let max_cascades = lookup("MATCH3_MAX_CASCADES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_cascades);

        let output = lookup("MATCH3_OUTPUT")
            .and_then(|s| OutputFormat::parse(&s))
            .unwrap_or(defaults.output);

        Self {
            size: Size::new(width, height),
            types,
            seed,
            max_cascades,
            output,
        }
    }

    pub fn type_registry(&self) -> Types {
        self.types.iter().cloned().collect()
    }

    /// Create a game with this configuration and fill its board.
    pub fn build(&self) -> Result<Game> {
        let mut game = Game::new(self.size);
        game.set_types(&self.type_registry());
        match self.seed {
            Some(seed) => game.fill_board_with_rng(&mut StdRng::seed_from_u64(seed))?,
            None => game.fill_board()?,
        }
        info!(
            width = self.size.width(),
            height = self.size.height(),
            types = game.types().len(),
            seed = ?self.seed,
            "game ready"
        );
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use match3_core::BoardError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(|_| None);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_values_parsed() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MATCH3_WIDTH", "5"),
            ("MATCH3_HEIGHT", " 4 "),
            ("MATCH3_TYPES", "x, y ,,z"),
            ("MATCH3_SEED", "42"),
            ("MATCH3_MAX_CASCADES", "3"),
            ("MATCH3_OUTPUT", "JSON"),
        ]));
        assert_eq!(config.size, Size::new(5, 4));
        assert_eq!(config.types, vec!["x", "y", "z"]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_cascades, 3);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MATCH3_WIDTH", "wide"),
            ("MATCH3_TYPES", " , "),
            ("MATCH3_SEED", "-1"),
            ("MATCH3_OUTPUT", "xml"),
        ]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_build_seeded_is_reproducible() {
        let config = GameConfig {
            size: Size::new(4, 3),
            seed: Some(9),
            ..GameConfig::default()
        };
        let a = config.build().unwrap();
        let b = config.build().unwrap();
        assert_eq!(a.board().item_count(), 12);
        assert_eq!(a.board().snapshot(), b.board().snapshot());
    }

    #[test]
    fn test_build_without_types() {
        let config = GameConfig {
            types: Vec::new(),
            ..GameConfig::default()
        };
        assert_eq!(
            config.build().unwrap_err(),
            EngineError::Board(BoardError::EmptyTypePool)
        );
    }
}
