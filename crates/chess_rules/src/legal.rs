//! Legality filtering and check detection.

use crate::board::Board;
use crate::movegen::{attacked_squares, pseudo_legal_moves, pseudo_moves_into};
use crate::types::*;

/// Generate all legal moves for `colour`, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the board only once.
pub fn legal_moves(board: &Board, colour: Colour) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, colour, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Each candidate is played on `board` and taken back again, so `board` is
/// unchanged on return.
pub fn legal_moves_into(board: &mut Board, colour: Colour, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves_into(board, colour, out);
    retain_legal(board, colour, out);
}

/// Legal moves of the piece standing on `from`, for highlighting a selection.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    let colour = match board.piece_at(from) {
        Some(pc) => pc.colour,
        None => return Vec::new(),
    };
    let mut moves = pseudo_legal_moves(board, from);
    let mut tmp = board.clone();
    retain_legal(&mut tmp, colour, &mut moves);
    moves
}

fn retain_legal(board: &mut Board, colour: Colour, moves: &mut Vec<Move>) {
    // A from == to entry means "no displacement" and is never a move.
    moves.retain(|mv| mv.from() != mv.to());

    // The filter plays moves for `colour`, which need not be the side to move.
    let side_to_move = board.side_to_move();
    board.set_side_to_move(colour);
    moves.retain(|&mv| {
        let undo = board.apply(mv);
        let exposed = board.in_check(colour);
        board.undo(mv, undo);
        !exposed
    });
    board.set_side_to_move(side_to_move);
}

impl Board {
    /// Whether `colour`'s king stands on a square the opponent attacks.
    pub fn in_check(&self, colour: Colour) -> bool {
        attacked_squares(self, colour.other()).contains(self.king_square(colour))
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self, self.side_to_move())
    }
}

#[cfg(test)]
#[path = "legal_tests.rs"]
mod legal_tests;
