//! A set of board squares packed into 64 bits.
//!
//! Bit `n` is the square with `Square::index() == n` (a8 = 0, h1 = 63).

use crate::types::Square;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }
}

#[cfg(test)]
#[path = "square_set_tests.rs"]
mod square_set_tests;
