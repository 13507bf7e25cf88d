use super::*;
use crate::board::START_FEN;

#[test]
fn test_start_fen_matches_start_position() {
    let board = Board::from_fen(START_FEN).unwrap();
    assert_eq!(board, Board::start_position());
    assert_eq!(board.king_square(Colour::White), Square::new(7, 4).unwrap());
    assert_eq!(board.king_square(Colour::Black), Square::new(0, 4).unwrap());
}

#[test]
fn test_placement_only_defaults_to_white() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
    assert_eq!(board.side_to_move(), Colour::White);
}

#[test]
fn test_active_colour_honoured() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    assert_eq!(board.side_to_move(), Colour::Black);
}

#[test]
fn test_unrecognized_character_rejected() {
    let err = Board::from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1").unwrap_err();
    assert!(matches!(err, ChessError::InvalidPosition(_)));
}

#[test]
fn test_partial_board_rejected() {
    assert!(Board::from_fen("4k3/8/8/8/8/8/4K3 w").is_err());
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K2 w").is_err());
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K4 w").is_err());
    assert!(Board::from_fen("").is_err());
}

#[test]
fn test_king_count_enforced() {
    assert!(Board::from_fen("8/8/8/8/8/8/8/4K3 w").is_err());
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/3KK3 w").is_err());
}

#[test]
fn test_bad_active_colour_rejected() {
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
}

#[test]
fn test_to_fen_round_trips_placement() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b";
    let board = Board::from_fen(fen).unwrap();
    assert_eq!(board.to_fen(), fen);
}
