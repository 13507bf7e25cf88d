//! Pseudo-legal move generation and attacked-square computation.
//!
//! Moves produced here obey piece geometry, pawn rules, en passant and
//! castling preconditions, but may still leave the mover's own king in
//! check; [`crate::legal`] filters those out.

use crate::board::Board;
use crate::square_set::SquareSet;
use crate::types::*;

/// Pseudo-legal moves for the piece on `from` (empty if the square is empty).
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    if let Some(pc) = board.piece_at(from) {
        gen_piece(board, from, pc, &mut out);
    }
    out
}

/// Pseudo-legal moves for every piece of `colour`.
pub fn pseudo_legal_moves_for(board: &Board, colour: Colour) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves_into(board, colour, &mut out);
    out
}

pub(crate) fn pseudo_moves_into(board: &Board, colour: Colour, out: &mut Vec<Move>) {
    for (from, pc) in board.pieces(colour) {
        gen_piece(board, from, pc, out);
    }
}

/// Every square `by` attacks, whether empty, enemy-held or defended.
///
/// Pawns contribute only their diagonal captures and kings never contribute
/// castling, so this never recurses into castling generation.
pub fn attacked_squares(board: &Board, by: Colour) -> SquareSet {
    let mut attacked = SquareSet::EMPTY;
    for (from, pc) in board.pieces(by) {
        match pc.kind.movement() {
            Movement::Pawn => {
                for dc in [-1, 1] {
                    if let Some(to) = from.offset(by.pawn_direction(), dc) {
                        attacked.insert(to);
                    }
                }
            }
            movement => scan(board, from, movement, |to, _| attacked.insert(to)),
        }
    }
    attacked
}

fn gen_piece(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind.movement() {
        Movement::Pawn => gen_pawn(board, from, pc, out),
        movement => {
            scan(board, from, movement, |to, occupant| match occupant {
                Some(other) if other.colour == pc.colour => {}
                _ => out.push(Move::new(from, to)),
            });
            if pc.kind == PieceKind::King {
                gen_castle(board, from, pc, out);
            }
        }
    }
}

/// Walks step or slide geometry from `from`, reporting each reachable square and
/// its occupant. A slide stops at the first occupied square, which is still reported.
fn scan(board: &Board, from: Square, movement: Movement, mut visit: impl FnMut(Square, Option<Piece>)) {
    match movement {
        Movement::Step(offsets) => {
            for &(dr, dc) in offsets {
                if let Some(to) = from.offset(dr, dc) {
                    visit(to, board.piece_at(to));
                }
            }
        }
        Movement::Slide(dirs) => {
            for &(dr, dc) in dirs {
                let mut cur = from;
                while let Some(to) = cur.offset(dr, dc) {
                    let occupant = board.piece_at(to);
                    visit(to, occupant);
                    if occupant.is_some() {
                        break;
                    }
                    cur = to;
                }
            }
        }
        Movement::Pawn => {}
    }
}

fn gen_pawn(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let c = pc.colour;
    let dir = c.pawn_direction();

    // forward 1, then forward 2 from the start row if both squares are free
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            push_pawn_move(from, one, c, out);

            if pc.moves == 0 && from.row() == c.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(target) = board.piece_at(to) {
                if target.colour != c {
                    push_pawn_move(from, to, c, out);
                }
            }
        }
    }

    // en passant against a pawn that just double-stepped alongside us
    if let Some(last) = board.last_move() {
        if last.is_double_pawn_step()
            && last.piece.colour != c
            && last.to.row() == from.row()
            && last.to.col().abs_diff(from.col()) == 1
        {
            let dc = last.to.col() as i8 - from.col() as i8;
            if let Some(to) = from.offset(dir, dc) {
                if board.piece_at(to).is_none() {
                    out.push(Move::EnPassant {
                        from,
                        to,
                        captured: last.to,
                    });
                }
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, c: Colour, out: &mut Vec<Move>) {
    if to.row() == c.promotion_row() {
        for promote_to in PieceKind::PROMOTIONS {
            out.push(Move::Promotion {
                from,
                to,
                promote_to,
            });
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_castle(board: &Board, from: Square, king: Piece, out: &mut Vec<Move>) {
    let c = king.colour;
    if king.moves != 0 || from != castle_square(c, KING_HOME_COL) {
        return;
    }

    let enemy_attacks = attacked_squares(board, c.other());
    // Can't castle out of check.
    if enemy_attacks.contains(from) {
        return;
    }

    // Every square strictly between king and rook must be empty and unattacked
    // (b, c and d on the queenside).
    let sides: [(Move, u8, &[u8]); 2] = [
        (Move::CastleKingside(c), 7, &[5, 6]),
        (Move::CastleQueenside(c), 0, &[1, 2, 3]),
    ];
    for (mv, rook_col, between) in sides {
        let rook_ready = matches!(
            board.piece_at(castle_square(c, rook_col)),
            Some(Piece { kind: PieceKind::Rook, colour, moves: 0 }) if colour == c
        );
        if !rook_ready {
            continue;
        }
        let open = between.iter().all(|&col| {
            let sq = castle_square(c, col);
            board.piece_at(sq).is_none() && !enemy_attacks.contains(sq)
        });
        if open {
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
