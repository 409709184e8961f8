use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_WIN_VALUE;
use crate::grid::Tile;

/// Construction-time game parameters.
///
/// Missing fields in a config file fall back to the defaults (4x4, 2048,
/// entropy-seeded spawns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub win_value: Tile,
    /// Seed for the spawn RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { height: 4, width: 4, win_value: DEFAULT_WIN_VALUE, seed: None }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a {height}x{width} board cannot hold the two opening tiles")]
    TooSmall { height: usize, width: usize },
    #[error("win value {0} is unreachable, must be at least 2")]
    InvalidWinValue(Tile),
}

impl GameConfig {
    /// Read a JSON config file. Absent keys keep their defaults.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height.saturating_mul(self.width) < 2 {
            return Err(ConfigError::TooSmall { height: self.height, width: self.width });
        }
        if self.win_value < 2 {
            return Err(ConfigError::InvalidWinValue(self.win_value));
        }
        Ok(())
    }
}
