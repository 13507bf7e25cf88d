//! Game records written after a run

use chess_rules::{parse_coord_move, Colour, Game, GameStatus};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AutoplayError, Result};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// Cut off at `max_plies`
    MaxPlies,
    /// A scripted player had no moves left
    ScriptExhausted,
}

impl Outcome {
    /// Outcome decided on the board, if the game is over.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate {
                winner: Colour::White,
            } => Some(Outcome::WhiteWins),
            GameStatus::Checkmate {
                winner: Colour::Black,
            } => Some(Outcome::BlackWins),
            GameStatus::Stalemate => Some(Outcome::Stalemate),
        }
    }

    /// Score in the usual notation; "*" for games that were cut short.
    pub fn score(&self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Stalemate => "1/2-1/2",
            Outcome::MaxPlies | Outcome::ScriptExhausted => "*",
        }
    }
}

/// A finished game: where it started, every move in coordinate notation, how it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start_fen: String,
    pub depth: u8,
    pub moves: Vec<String>,
    pub result: Outcome,
    pub plies: u32,
}

impl GameRecord {
    /// Save the record as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a record from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Play the recorded moves from the start position, checking each is legal.
    pub fn replay(&self) -> Result<Game> {
        let mut game = Game::from_fen(&self.start_fen)?;
        for (i, text) in self.moves.iter().enumerate() {
            let illegal = || AutoplayError::IllegalScriptedMove {
                ply: i as u32 + 1,
                text: text.clone(),
            };
            let mv = parse_coord_move(game.board(), text).ok_or_else(illegal)?;
            game.play_move(mv).ok_or_else(illegal)?;
        }
        Ok(game)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
