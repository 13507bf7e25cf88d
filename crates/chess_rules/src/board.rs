use std::fmt;

use crate::error::Result;
use crate::types::*;

/// Full game state needed by the rules: piece placement, turn, king squares and last move.
///
/// Lives for one game and is mutated in place by [`Board::apply`]/[`Board::undo`].
/// `king_squares` always mirrors the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    side_to_move: Colour,
    king_squares: [Square; 2],
    last_move: Option<MoveRecord>,
}

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    pub fn start_position() -> Self {
        let mut squares = [[None; 8]; 8];
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            squares[0][col] = Some(Piece::new(kind, Colour::Black));
            squares[1][col] = Some(Piece::new(PieceKind::Pawn, Colour::Black));
            squares[6][col] = Some(Piece::new(PieceKind::Pawn, Colour::White));
            squares[7][col] = Some(Piece::new(kind, Colour::White));
        }
        Board {
            squares,
            side_to_move: Colour::White,
            king_squares: [
                castle_square(Colour::White, KING_HOME_COL),
                castle_square(Colour::Black, KING_HOME_COL),
            ],
            last_move: None,
        }
    }

    /// Assemble a board from parts. Callers guarantee the king squares match the grid.
    pub(crate) fn from_parts(
        squares: [[Option<Piece>; 8]; 8],
        side_to_move: Colour,
        king_squares: [Square; 2],
    ) -> Self {
        Board {
            squares,
            side_to_move,
            king_squares,
            last_move: None,
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Occupant of a raw coordinate, rejecting anything off the board.
    pub fn get(&self, row: i8, col: i8) -> Result<Option<Piece>> {
        Square::new(row, col).map(|sq| self.piece_at(sq))
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    pub(crate) fn set_side_to_move(&mut self, colour: Colour) {
        self.side_to_move = colour;
    }

    /// Copy of this board with `colour` to move, e.g. to search for either side.
    pub fn with_side_to_move(&self, colour: Colour) -> Board {
        let mut board = self.clone();
        board.side_to_move = colour;
        board
    }

    pub fn king_square(&self, colour: Colour) -> Square {
        self.king_squares[colour.idx()]
    }

    pub(crate) fn set_king_square(&mut self, colour: Colour, sq: Square) {
        self.king_squares[colour.idx()] = sq;
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    pub(crate) fn set_last_move(&mut self, record: Option<MoveRecord>) {
        self.last_move = record;
    }

    /// All pieces of one colour with their squares, in row-major order.
    pub fn pieces(&self, colour: Colour) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.colour == colour => Some((sq, pc)),
            _ => None,
        })
    }

    /// Sum of piece values for one colour.
    pub fn material(&self, colour: Colour) -> i32 {
        self.pieces(colour).map(|(_, pc)| pc.value()).sum()
    }

    /// Text diagram with rank 8 at the top, for logs and debugging.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(8 * 20);
        for row in 0..8u8 {
            out.push((b'8' - row) as char);
            out.push(' ');
            for col in 0..8u8 {
                let ch = self.squares[row as usize][col as usize]
                    .map(|pc| pc.symbol())
                    .unwrap_or('.');
                out.push(ch);
                if col < 7 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::start_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}
