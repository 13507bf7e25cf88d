//! Make/unmake: committing a move to the board and exactly reversing it.

use crate::board::Board;
use crate::types::*;

/// What [`Board::undo`] needs to restore the position [`Board::apply`] changed.
#[derive(Clone, Debug)]
pub struct Undo {
    /// The moving piece as it stood before the move (pawn for promotions).
    pub moved_piece: Piece,
    /// Captured piece and the square it was taken from (differs from `to` for en passant).
    pub captured: Option<(Square, Piece)>,
    pub last_move: Option<MoveRecord>,
    pub king_square: Square,
    /// Rook as it stood before castling.
    pub rook: Option<Piece>,
}

impl Board {
    /// Plays `mv` for the side to move. The move must come from the legal move list.
    pub fn apply(&mut self, mv: Move) -> Undo {
        let mover = self.side_to_move();
        let from = mv.from();
        let to = mv.to();
        let moved = self
            .piece_at(from)
            .expect("apply called with no piece on the from-square");

        let mut undo = Undo {
            moved_piece: moved,
            captured: None,
            last_move: self.last_move(),
            king_square: self.king_square(mover),
            rook: None,
        };

        match mv {
            Move::EnPassant { captured, .. } => {
                undo.captured = self.piece_at(captured).map(|pc| (captured, pc));
                self.set_piece(captured, None);
            }
            Move::CastleKingside(_) | Move::CastleQueenside(_) => {
                if let Some((rook_from, rook_to)) = mv.castle_rook() {
                    let rook = self.piece_at(rook_from);
                    undo.rook = rook;
                    self.set_piece(rook_from, None);
                    self.set_piece(
                        rook_to,
                        rook.map(|r| Piece {
                            moves: r.moves + 1,
                            ..r
                        }),
                    );
                }
            }
            _ => {
                undo.captured = self.piece_at(to).map(|pc| (to, pc));
            }
        }

        let placed = Piece {
            kind: mv.promotion().unwrap_or(moved.kind),
            moves: moved.moves + 1,
            ..moved
        };
        self.set_piece(from, None);
        self.set_piece(to, Some(placed));

        if moved.kind == PieceKind::King {
            self.set_king_square(mover, to);
        }
        self.set_last_move(Some(MoveRecord {
            piece: placed,
            from,
            to,
        }));
        self.set_side_to_move(mover.other());

        undo
    }

    /// Reverses `apply(mv)`, restoring the board exactly.
    pub fn undo(&mut self, mv: Move, undo: Undo) {
        let mover = self.side_to_move().other();
        self.set_side_to_move(mover);
        self.set_last_move(undo.last_move);
        self.set_king_square(mover, undo.king_square);

        let from = mv.from();
        let to = mv.to();
        self.set_piece(to, None);
        self.set_piece(from, Some(undo.moved_piece));

        if let Some((rook_from, rook_to)) = mv.castle_rook() {
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, undo.rook);
        }

        if let Some((sq, pc)) = undo.captured {
            self.set_piece(sq, Some(pc));
        }
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
