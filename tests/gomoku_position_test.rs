//! Tests for five-in-a-row board positions.

use five_in_a_row::{Board, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::new(0, 0).unwrap().to_index(), 0);
    assert_eq!(Position::new(7, 7).unwrap().to_index(), 112);
    assert_eq!(Position::new(14, 14).unwrap().to_index(), 224);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Position::new(0, 0));
    assert_eq!(Position::from_index(16), Position::new(1, 1));
    assert_eq!(Position::from_index(224), Position::new(14, 14));
    assert_eq!(Position::from_index(225), None);
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 11).unwrap().to_string(), "(3, 11)");
}

#[test]
fn test_board_lookup_by_position_and_index() {
    let board = Board::new()
        .with(Position::from_index(0).unwrap(), Player::X)
        .with(Position::center(), Player::O);

    assert!(!board.is_empty(Position::new(0, 0).unwrap()));
    assert!(board.is_empty(Position::new(14, 14).unwrap()));
    assert_eq!(board.at(Position::center()), Square::Occupied(Player::O));
    assert_eq!(board.get(112), Some(Square::Occupied(Player::O)));
    assert_eq!(board.get(225), None);
    assert_eq!(board.occupied_count(), 2);
}
