//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning and material-only evaluation.

mod eval;
mod search;

use chess_rules::{Board, Engine, SearchResult};

pub use eval::evaluate;
pub use search::{
    best_move, best_move_parallel, best_move_unpruned, minimax, minimax_unpruned, search_root,
    search_root_parallel, SearchOutcome, INFINITY, MATE_SCORE,
};

/// Depth below the root ply used when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 3;

/// Minimax engine searching for the side to move.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning
/// - Material evaluation with the catalog piece values
/// - Optional root parallelism on the rayon pool
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
    parallel: bool,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            parallel: false,
        }
    }

    /// Engine that spreads root moves over the rayon pool.
    pub fn parallel() -> Self {
        Self {
            nodes: 0,
            parallel: true,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        let colour = board.side_to_move();
        let outcome = if self.parallel {
            search_root_parallel(board, colour, depth)
        } else {
            search_root(board, colour, depth)
        };
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
