pub mod apply;
pub mod board;
pub mod error;
pub mod fen;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod square_set;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use apply::Undo;
pub use board::*;
pub use error::{ChessError, Result};
pub use game::*;
pub use legal::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use square_set::SquareSet;
pub use types::*;

// =============================================================================
// Engine trait: implemented by automated opponents
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Material score from the searching side's perspective
    pub score: i32,
    /// Plies searched below each root move (lookahead is `depth + 1` plies)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all automated players implement.
///
/// Search is synchronous and runs to completion at the requested depth.
/// `board` is never mutated; engines search their own copy.
pub trait Engine: Send {
    /// Pick a move for the side to move in `board`.
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult;

    /// Returns the engine's name for logs and game records
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
