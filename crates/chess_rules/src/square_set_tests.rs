use super::*;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_insert_and_contains() {
    let mut set = SquareSet::EMPTY;
    assert!(!set.contains(sq(0, 0)));

    set.insert(sq(0, 0));
    set.insert(sq(7, 7));
    set.insert(sq(7, 7));
    assert!(set.contains(sq(0, 0)));
    assert!(set.contains(sq(7, 7)));
    assert!(!set.contains(sq(3, 4)));
    assert_eq!(set.0.count_ones(), 2);
}

#[test]
fn test_bits_follow_square_index() {
    let mut set = SquareSet::default();
    set.insert(sq(0, 3));
    set.insert(sq(7, 0));
    assert_eq!(set.0, (1 << 3) | (1 << 56));
}
