//! Match configuration loaded from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Side, MAX_COLUMNS, MIN_COLUMNS};
use crate::engine::{AiConfig, Difficulty, Strategy};
use crate::error::ConfigError;

/// Deepest search a config may ask for
pub const MAX_DEPTH: u8 = 8;

/// AI settings of one side: a named difficulty, optionally refined by an
/// explicit strategy or depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
}

impl PlayerConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..Self::default()
        }
    }

    /// Resolved strategy and depth
    pub fn ai(&self) -> AiConfig {
        let base = AiConfig::from(self.difficulty.unwrap_or_default());
        AiConfig {
            strategy: self.strategy.unwrap_or(base.strategy),
            depth: self.depth.unwrap_or(base.depth),
        }
    }
}

/// Settings of a series of AI-vs-AI games, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Columns per lane (pieces per side)
    pub columns: usize,
    /// Side that throws first in every game
    pub first: Side,
    /// Number of games to play
    pub games: u32,
    /// Throws after which a game is scored as a draw
    pub max_throws: u32,
    /// Fixed RNG seed for reproducible matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub side_a: PlayerConfig,
    pub side_b: PlayerConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            columns: 9,
            first: Side::SideA,
            games: 1,
            max_throws: 2_000,
            seed: None,
            side_a: PlayerConfig::default(),
            side_b: PlayerConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// AI settings for `side`
    pub fn player(&self, side: Side) -> &PlayerConfig {
        match side {
            Side::SideA => &self.side_a,
            Side::SideB => &self.side_b,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ConfigError::Validation(format!(
                "columns must be in [{MIN_COLUMNS}, {MAX_COLUMNS}]"
            )));
        }
        if self.games == 0 {
            return Err(ConfigError::Validation("games must be > 0".into()));
        }
        if self.max_throws == 0 {
            return Err(ConfigError::Validation("max_throws must be > 0".into()));
        }
        for (name, player) in [("side_a", &self.side_a), ("side_b", &self.side_b)] {
            if player.ai().depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{name}.depth must be <= {MAX_DEPTH}"
                )));
            }
        }
        Ok(())
    }

    /// TOML document with every default value.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&MatchConfig::default())
    }
}
