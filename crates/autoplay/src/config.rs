//! Runner configuration, loaded from TOML

use chess_rules::{Colour, START_FEN};
use minimax_engine::DEFAULT_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Who chooses the moves for one colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// The minimax engine
    #[default]
    Engine,
    /// The next entry of `scripted_moves`
    Scripted,
}

/// Settings for one automated game. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    /// Starting position in FEN (placement and active colour are used)
    pub start_fen: String,
    /// Plies searched below each candidate move, so the engine looks `depth + 1` plies ahead
    pub depth: u8,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Coordinate moves (`e2e4`, `e7e8q`) consumed in order by scripted players
    pub scripted_moves: Vec<String>,
    /// Plies played before the game is cut off
    pub max_plies: u32,
    /// Split root moves across the rayon pool
    pub parallel: bool,
    /// Where to write the JSON game record, if anywhere
    pub record_path: Option<PathBuf>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            start_fen: START_FEN.to_string(),
            depth: DEFAULT_DEPTH,
            white: PlayerKind::Engine,
            black: PlayerKind::Engine,
            scripted_moves: Vec::new(),
            max_plies: 200,
            parallel: false,
            record_path: None,
        }
    }
}

impl AutoplayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn player(&self, colour: Colour) -> PlayerKind {
        match colour {
            Colour::White => self.white,
            Colour::Black => self.black,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
