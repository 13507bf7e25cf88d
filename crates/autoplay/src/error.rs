use chess_rules::ChessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoplayError {
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Game record error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Rules(#[from] ChessError),

    /// A scripted move did not match any legal move at its ply.
    #[error("Scripted move '{text}' at ply {ply} is not legal")]
    IllegalScriptedMove { ply: u32, text: String },

    /// The engine found no move although the game was still going.
    #[error("Engine returned no move at ply {ply}")]
    NoEngineMove { ply: u32 },

    #[error("Engine move '{text}' at ply {ply} is not legal")]
    IllegalEngineMove { ply: u32, text: String },
}

pub type Result<T> = std::result::Result<T, AutoplayError>;
