use super::*;

#[test]
fn test_square_names() {
    assert_eq!(square_name(Square::new(7, 0).unwrap()), "a1");
    assert_eq!(square_name(Square::new(0, 7).unwrap()), "h8");
    assert_eq!(parse_square("e4"), Square::checked(4, 4));
    assert_eq!(parse_square("i1"), None);
    assert_eq!(parse_square("a9"), None);
    assert_eq!(parse_square("a"), None);
}

#[test]
fn test_parse_simple_move() {
    let board = Board::start_position();
    let mv = parse_coord_move(&board, "g1f3").unwrap();
    assert_eq!(move_to_coord(mv), "g1f3");
    assert!(parse_coord_move(&board, "e2e5").is_none());
    assert!(parse_coord_move(&board, "e7e5").is_none(), "not Black's turn");
}

#[test]
fn test_parse_castle_resolves_to_tagged_move() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w").unwrap();
    assert_eq!(
        parse_coord_move(&board, "e1g1"),
        Some(Move::CastleKingside(Colour::White))
    );
}

#[test]
fn test_parse_promotion_suffix() {
    let board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K3 w").unwrap();
    let mv = parse_coord_move(&board, "b7b8n").unwrap();
    assert_eq!(mv.promotion(), Some(PieceKind::Knight));
    assert_eq!(move_to_coord(mv), "b7b8n");

    let default = parse_coord_move(&board, "b7b8").unwrap();
    assert_eq!(default.promotion(), Some(PieceKind::Queen));

    assert!(parse_coord_move(&board, "b7b8k").is_none());
}
