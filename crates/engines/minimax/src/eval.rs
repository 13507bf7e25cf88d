//! Material-only position evaluation

use chess_rules::{Board, Colour};

/// Evaluates the position from `perspective`'s side.
///
/// Sum of `perspective`'s piece values minus the opponent's, using the
/// catalog values (kings included, so they cancel while both are on the board).
/// No positional terms.
pub fn evaluate(board: &Board, perspective: Colour) -> i32 {
    board.material(perspective) - board.material(perspective.other())
}
