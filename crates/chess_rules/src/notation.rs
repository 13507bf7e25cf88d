//! Square names and coordinate move text (`e2e4`, `e7e8q`).

use crate::board::Board;
use crate::legal::legal_moves;
use crate::types::*;

pub fn square_name(sq: Square) -> String {
    let f = (b'a' + sq.col()) as char;
    let r = (b'8' - sq.row()) as char;
    format!("{f}{r}")
}

pub fn parse_square(txt: &str) -> Option<Square> {
    let b = txt.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let (f, r) = (b[0], b[1]);
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Square::checked((b'8' - r) as i8, (f - b'a') as i8)
}

pub fn move_to_coord(mv: Move) -> String {
    let mut s = square_name(mv.from());
    s.push_str(&square_name(mv.to()));
    if let Some(kind) = mv.promotion() {
        s.push(kind.letter());
    }
    s
}

/// Resolve coordinate text against the legal moves of the side to move.
///
/// Matching against the legal list attaches the right special-move tag
/// (castling, en passant). A promotion without a suffix resolves to a queen.
pub fn parse_coord_move(board: &Board, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if txt.len() < 4 || txt.len() > 5 || !txt.is_ascii() {
        return None;
    }
    let from = parse_square(&txt[0..2])?;
    let to = parse_square(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch)? {
            PieceKind::King | PieceKind::Pawn => return None,
            kind => Some(kind),
        },
    };

    legal_moves(board, board.side_to_move())
        .into_iter()
        .find(|m| match m.promotion() {
            Some(kind) => m.from() == from && m.to() == to && kind == promo.unwrap_or(PieceKind::Queen),
            None => m.from() == from && m.to() == to && promo.is_none(),
        })
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
