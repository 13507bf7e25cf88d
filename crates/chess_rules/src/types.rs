use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];

    pub fn other(self) -> Colour {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Colour::White => 0,
            Colour::Black => 1,
        }
    }

    /// Row this colour's pieces start on (row 0 is rank 8).
    pub fn home_row(self) -> u8 {
        match self {
            Colour::White => 7,
            Colour::Black => 0,
        }
    }

    /// Row direction a pawn of this colour advances in.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Colour::White => -1,
            Colour::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Colour::White => 6,
            Colour::Black => 1,
        }
    }

    /// Row on which this colour's pawns promote.
    pub fn promotion_row(self) -> u8 {
        self.other().home_row()
    }
}

/// How a piece kind moves across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// One hop per offset; cannot be blocked mid-path.
    Step(&'static [(i8, i8)]),
    /// Repeated along each direction until blocked or off the board.
    Slide(&'static [(i8, i8)]),
    Pawn,
}

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Kinds a pawn may promote to, in the order they are offered.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Bishop,
    ];

    /// Material value. The king's value is a "never trade" sentinel, not a mate score.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1_000_000,
        }
    }

    pub fn movement(self) -> Movement {
        match self {
            PieceKind::King => Movement::Step(&KING_STEPS),
            PieceKind::Knight => Movement::Step(&KNIGHT_STEPS),
            PieceKind::Queen => Movement::Slide(&ALL_DIRECTIONS),
            PieceKind::Rook => Movement::Slide(&ORTHOGONALS),
            PieceKind::Bishop => Movement::Slide(&DIAGONALS),
            PieceKind::Pawn => Movement::Pawn,
        }
    }

    /// Lowercase FEN letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
    /// Times this piece has moved; drives castling rights and pawn double steps.
    pub moves: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, colour: Colour) -> Self {
        Self {
            kind,
            colour,
            moves: 0,
        }
    }

    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    /// FEN letter, uppercase for White.
    pub fn symbol(&self) -> char {
        let ch = self.kind.letter();
        match self.colour {
            Colour::White => ch.to_ascii_uppercase(),
            Colour::Black => ch,
        }
    }
}

/// A board coordinate. Row 0 is rank 8, column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Result<Square> {
        Square::checked(row, col).ok_or(ChessError::OutOfBounds { row, col })
    }

    pub fn checked(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square at 0..64, row-major from the top-left corner.
    pub fn from_index(idx: usize) -> Option<Square> {
        if idx < 64 {
            Some(Square {
                row: (idx / 8) as u8,
                col: (idx % 8) as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// The square `(dr, dc)` away, or `None` if that falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::checked(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

/// A move, tagged with whatever the applier needs to play it without re-deriving state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Simple {
        from: Square,
        to: Square,
    },
    EnPassant {
        from: Square,
        to: Square,
        /// Square of the pawn that just double-stepped.
        captured: Square,
    },
    Promotion {
        from: Square,
        to: Square,
        promote_to: PieceKind,
    },
    CastleKingside(Colour),
    CastleQueenside(Colour),
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move::Simple { from, to }
    }

    pub fn from(self) -> Square {
        match self {
            Move::Simple { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Promotion { from, .. } => from,
            Move::CastleKingside(c) | Move::CastleQueenside(c) => castle_square(c, KING_HOME_COL),
        }
    }

    pub fn to(self) -> Square {
        match self {
            Move::Simple { to, .. } | Move::EnPassant { to, .. } | Move::Promotion { to, .. } => to,
            Move::CastleKingside(c) => castle_square(c, 6),
            Move::CastleQueenside(c) => castle_square(c, 2),
        }
    }

    pub fn promotion(self) -> Option<PieceKind> {
        match self {
            Move::Promotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    pub fn is_castle(self) -> bool {
        matches!(self, Move::CastleKingside(_) | Move::CastleQueenside(_))
    }

    /// Rook relocation `(from, to)` for castling moves.
    pub fn castle_rook(self) -> Option<(Square, Square)> {
        match self {
            Move::CastleKingside(c) => Some((castle_square(c, 7), castle_square(c, 5))),
            Move::CastleQueenside(c) => Some((castle_square(c, 0), castle_square(c, 3))),
            _ => None,
        }
    }
}

pub(crate) const KING_HOME_COL: u8 = 4;

pub(crate) fn castle_square(colour: Colour, col: u8) -> Square {
    Square {
        row: colour.home_row(),
        col,
    }
}

/// The most recent half-move, kept only for en-passant eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl MoveRecord {
    pub fn is_double_pawn_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}
