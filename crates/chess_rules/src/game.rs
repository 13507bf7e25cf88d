//! Live-game façade for presentation layers.
//!
//! A drawing/input layer reads occupants, highlights the selected piece's legal
//! moves, asks whether the side to move is in check, and submits a chosen
//! destination (plus a promotion choice). Each accepted move is reported as a
//! [`MovePlayed`] event carrying what sound/visual feedback needs.

use crate::board::Board;
use crate::error::Result;
use crate::legal::{legal_moves, legal_moves_from};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Colour },
    Stalemate,
}

/// Emitted for every move accepted by [`Game::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePlayed {
    pub mv: Move,
    pub mover: Colour,
    pub captured: Option<Piece>,
    /// The opponent's king is attacked after the move.
    pub gives_check: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::start_position(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        Ok(Self {
            board: Board::from_fen(fen)?,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Colour {
        self.board.side_to_move()
    }

    /// Piece on a raw coordinate, for drawing.
    pub fn occupant(&self, row: i8, col: i8) -> Result<Option<Piece>> {
        self.board.get(row, col)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.board.side_to_move())
    }

    /// Legal moves of the selected piece; empty unless it belongs to the side to move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        match self.board.piece_at(from) {
            Some(pc) if pc.colour == self.board.side_to_move() => legal_moves_from(&self.board, from),
            _ => Vec::new(),
        }
    }

    pub fn is_in_check(&self) -> bool {
        self.board.in_check(self.board.side_to_move())
    }

    /// Resolve a (from, to) pick into a legal move.
    ///
    /// Castling may be picked either as the king's destination or by dropping the
    /// king on its own rook. Promotions need `promotion`; without it no move matches.
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        self.legal_moves_from(from).into_iter().find(|m| {
            let lands = m.to() == to || m.castle_rook().map(|(rook, _)| rook) == Some(to);
            lands && m.promotion() == promotion
        })
    }

    /// Play the picked move if it is legal; `None` leaves the game untouched.
    pub fn play(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<MovePlayed> {
        let mv = self.find_move(from, to, promotion)?;
        Some(self.commit(mv))
    }

    /// Play an already-built move if it is in the legal move list.
    pub fn play_move(&mut self, mv: Move) -> Option<MovePlayed> {
        if !self.legal_moves().contains(&mv) {
            return None;
        }
        Some(self.commit(mv))
    }

    fn commit(&mut self, mv: Move) -> MovePlayed {
        let mover = self.board.side_to_move();
        let undo = self.board.apply(mv);
        MovePlayed {
            mv,
            mover,
            captured: undo.captured.map(|(_, pc)| pc),
            gives_check: self.board.in_check(mover.other()),
        }
    }

    pub fn status(&self) -> GameStatus {
        let side = self.board.side_to_move();
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.board.in_check(side) {
            GameStatus::Checkmate {
                winner: side.other(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
