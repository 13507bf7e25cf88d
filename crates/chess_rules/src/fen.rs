//! Position import from Forsyth-Edwards Notation.
//!
//! Only the piece-placement field is required. The active-colour field is
//! honoured when present; castling, en-passant and clock fields are accepted
//! but ignored, since castling and en passant are derived from piece move
//! counts and the board's last move. Every imported piece starts unmoved.

use crate::board::Board;
use crate::error::{ChessError, Result};
use crate::types::*;

impl Board {
    pub fn from_fen(fen: &str) -> Result<Board> {
        let mut fields = fen.split_whitespace();
        let placement = fields
            .next()
            .ok_or_else(|| ChessError::InvalidPosition("empty position string".into()))?;

        let mut squares = [[None; 8]; 8];
        let mut kings: [Option<Square>; 2] = [None, None];

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidPosition(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        for (row, rank) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 || d > 8 {
                        return Err(ChessError::InvalidPosition(format!(
                            "bad empty-square count '{ch}'"
                        )));
                    }
                    col += d as usize;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| {
                        ChessError::InvalidPosition(format!("unrecognized character '{ch}'"))
                    })?;
                    if col >= 8 {
                        return Err(ChessError::InvalidPosition(format!(
                            "too many files in rank {}",
                            8 - row
                        )));
                    }
                    let colour = if ch.is_ascii_uppercase() {
                        Colour::White
                    } else {
                        Colour::Black
                    };
                    if kind == PieceKind::King {
                        let slot = &mut kings[colour.idx()];
                        if slot.is_some() {
                            return Err(ChessError::InvalidPosition(format!(
                                "more than one {colour:?} king"
                            )));
                        }
                        *slot = Square::checked(row as i8, col as i8);
                    }
                    squares[row][col] = Some(Piece::new(kind, colour));
                    col += 1;
                }
                if col > 8 {
                    return Err(ChessError::InvalidPosition(format!(
                        "too many files in rank {}",
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidPosition(format!(
                    "rank {} covers {col} files, expected 8",
                    8 - row
                )));
            }
        }

        let side_to_move = match fields.next() {
            None | Some("w") => Colour::White,
            Some("b") => Colour::Black,
            Some(other) => {
                return Err(ChessError::InvalidPosition(format!(
                    "bad active colour '{other}'"
                )));
            }
        };

        let white_king = kings[0]
            .ok_or_else(|| ChessError::InvalidPosition("missing White king".into()))?;
        let black_king = kings[1]
            .ok_or_else(|| ChessError::InvalidPosition("missing Black king".into()))?;

        Ok(Board::from_parts(
            squares,
            side_to_move,
            [white_king, black_king],
        ))
    }

    /// Placement and active-colour fields of this board.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in 0..8i8 {
            let mut empty = 0;
            for col in 0..8i8 {
                match Square::checked(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(match self.side_to_move() {
            Colour::White => 'w',
            Colour::Black => 'b',
        });
        out
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
