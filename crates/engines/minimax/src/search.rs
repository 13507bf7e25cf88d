//! Minimax search with alpha-beta pruning
//!
//! Scores are always from the searching side's point of view: the searching
//! side maximizes, its opponent minimizes. The board is mutated in place with
//! strict apply/undo, so every call leaves it exactly as it found it.

use chess_rules::{legal_moves_into, move_to_coord, Board, Colour, Move};
use rayon::prelude::*;
use tracing::debug;

use crate::eval::evaluate;

/// Window bound; larger than any reachable score.
pub const INFINITY: i32 = i32::MAX;

/// Score of a checkmate, above any material balance (two kings plus a full army is ~2,000,100).
///
/// Only checkmate is scored this way. A side left without moves but not in
/// check is stalemated and scores 0, rather than counting as a loss.
pub const MATE_SCORE: i32 = 100_000_000;

/// Best move and score at the root, with the number of positions visited.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move found and its score (None if there are no legal moves)
    pub best_move: Option<(Move, i32)>,
    pub nodes: u64,
}

/// Recursive minimax with alpha-beta pruning.
///
/// `maximizing` says whether the side to move in `board` is the searching side.
/// Returns as soon as `beta <= alpha`.
pub fn minimax(board: &mut Board, depth: u8, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    let mut nodes = 0;
    alpha_beta(board, depth, maximizing, alpha, beta, &mut nodes)
}

/// Exhaustive minimax over the same tree, without pruning.
pub fn minimax_unpruned(board: &mut Board, depth: u8, maximizing: bool) -> i32 {
    let mut nodes = 0;
    full_width(board, depth, maximizing, &mut nodes)
}

/// Plays each of `colour`'s moves and searches `depth` further plies below it,
/// so the lookahead is `depth + 1` plies. Returns the best move and its score.
///
/// The first move reaching the best score wins ties.
pub fn best_move(board: &Board, colour: Colour, depth: u8) -> Option<(Move, i32)> {
    search_root(board, colour, depth).best_move
}

/// Like [`best_move`], also reporting the node count.
pub fn search_root(board: &Board, colour: Colour, depth: u8) -> SearchOutcome {
    let mut root = board.with_side_to_move(colour);
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut root, colour, &mut moves);

    let mut nodes = 1u64;
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INFINITY;

    for mv in moves {
        let undo = root.apply(mv);
        let score = alpha_beta(&mut root, depth, false, alpha, INFINITY, &mut nodes);
        root.undo(mv, undo);

        if score > alpha {
            debug!(mv = %move_to_coord(mv), score, "root move");
        } else {
            // Searched against the best score so far, so `score` only bounds the real value
            debug!(mv = %move_to_coord(mv), upper_bound = score, "root move fails low");
        }

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    log_outcome(colour, depth, best, nodes);
    SearchOutcome {
        best_move: best,
        nodes,
    }
}

/// Root search without pruning; reference result for [`best_move`].
pub fn best_move_unpruned(board: &Board, colour: Colour, depth: u8) -> Option<(Move, i32)> {
    let mut root = board.with_side_to_move(colour);
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut root, colour, &mut moves);

    let mut nodes = 1u64;
    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let undo = root.apply(mv);
        let score = full_width(&mut root, depth, false, &mut nodes);
        root.undo(mv, undo);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best
}

/// [`best_move`] with the root moves spread over the rayon pool.
pub fn best_move_parallel(board: &Board, colour: Colour, depth: u8) -> Option<(Move, i32)> {
    search_root_parallel(board, colour, depth).best_move
}

/// Root moves searched on the rayon pool, each worker on its own board copy.
///
/// Scores are gathered in generation order and the first strictly-best move
/// wins, so the result matches [`search_root`] whatever order workers finish in.
pub fn search_root_parallel(board: &Board, colour: Colour, depth: u8) -> SearchOutcome {
    let mut root = board.with_side_to_move(colour);
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut root, colour, &mut moves);

    let scored: Vec<(Move, i32, u64)> = moves
        .par_iter()
        .map(|&mv| {
            let mut worker = root.clone();
            let mut nodes = 0u64;
            worker.apply(mv);
            let score = alpha_beta(&mut worker, depth, false, -INFINITY, INFINITY, &mut nodes);
            (mv, score, nodes)
        })
        .collect();

    let mut nodes = 1u64;
    let mut best: Option<(Move, i32)> = None;
    for (mv, score, n) in scored {
        nodes += n;
        debug!(mv = %move_to_coord(mv), score, "root move");
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    log_outcome(colour, depth, best, nodes);
    SearchOutcome {
        best_move: best,
        nodes,
    }
}

fn log_outcome(colour: Colour, depth: u8, best: Option<(Move, i32)>, nodes: u64) {
    match best {
        Some((mv, score)) => {
            debug!(?colour, depth, nodes, best = %move_to_coord(mv), score, "search finished")
        }
        None => debug!(?colour, depth, nodes, "search finished without legal moves"),
    }
}

fn alpha_beta(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let mover = board.side_to_move();
    let searcher = if maximizing { mover } else { mover.other() };

    if depth == 0 {
        return evaluate(board, searcher);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, mover, &mut moves);
    if moves.is_empty() {
        return terminal_score(board, maximizing, depth);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let undo = board.apply(mv);
        let score = alpha_beta(board, depth - 1, !maximizing, alpha, beta, nodes);
        board.undo(mv, undo);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            return best;
        }
    }
    best
}

fn full_width(board: &mut Board, depth: u8, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;
    let mover = board.side_to_move();
    let searcher = if maximizing { mover } else { mover.other() };

    if depth == 0 {
        return evaluate(board, searcher);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, mover, &mut moves);
    if moves.is_empty() {
        return terminal_score(board, maximizing, depth);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let undo = board.apply(mv);
        let score = full_width(board, depth - 1, !maximizing, nodes);
        board.undo(mv, undo);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Score of a node where the side to move has no legal moves.
///
/// Checkmate is worth more the sooner it happens (more remaining depth);
/// stalemate is level.
fn terminal_score(board: &Board, maximizing: bool, depth: u8) -> i32 {
    if !board.in_check(board.side_to_move()) {
        return 0;
    }
    let mate = MATE_SCORE + depth as i32;
    if maximizing {
        -mate
    } else {
        mate
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
