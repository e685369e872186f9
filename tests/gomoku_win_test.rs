//! Tests for five-in-a-row win detection.

use five_in_a_row::{BOARD_SIZE, Board, LINE_LENGTH, Player, Position, check_winner};

fn board_with(cells: &[(usize, usize, Player)]) -> Board {
    cells.iter().fold(Board::new(), |board, &(row, col, player)| {
        board.with(Position::new(row, col).unwrap(), player)
    })
}

fn run(start: (usize, usize), step: (isize, isize), player: Player) -> Vec<(usize, usize, Player)> {
    (0..LINE_LENGTH as isize)
        .map(|k| {
            let row = start.0.checked_add_signed(step.0 * k).unwrap();
            let col = start.1.checked_add_signed(step.1 * k).unwrap();
            (row, col, player)
        })
        .collect()
}

#[test]
fn test_every_horizontal_run_wins() {
    for row in 0..BOARD_SIZE {
        for col in 0..=BOARD_SIZE - LINE_LENGTH {
            let board = board_with(&run((row, col), (0, 1), Player::X));
            assert_eq!(check_winner(&board), Some(Player::X), "row {} col {}", row, col);
        }
    }
}

#[test]
fn test_every_vertical_run_wins() {
    for row in 0..=BOARD_SIZE - LINE_LENGTH {
        for col in 0..BOARD_SIZE {
            let board = board_with(&run((row, col), (1, 0), Player::O));
            assert_eq!(check_winner(&board), Some(Player::O), "row {} col {}", row, col);
        }
    }
}

#[test]
fn test_every_diagonal_run_wins() {
    for row in 0..=BOARD_SIZE - LINE_LENGTH {
        for col in 0..=BOARD_SIZE - LINE_LENGTH {
            let down = board_with(&run((row, col), (1, 1), Player::X));
            assert_eq!(check_winner(&down), Some(Player::X));

            let up = board_with(&run((row, col + LINE_LENGTH - 1), (1, -1), Player::O));
            assert_eq!(check_winner(&up), Some(Player::O));
        }
    }
}

#[test]
fn test_four_of_each_never_wins() {
    let mut cells = run((0, 0), (0, 1), Player::X);
    cells.pop();
    let mut o_cells = run((5, 5), (1, 1), Player::O);
    o_cells.pop();
    cells.extend(o_cells);

    assert_eq!(check_winner(&board_with(&cells)), None);
}

#[test]
fn test_broken_run_does_not_win() {
    let mut cells = run((2, 2), (0, 1), Player::X);
    cells[2].2 = Player::O;
    assert_eq!(check_winner(&board_with(&cells)), None);
}

#[test]
fn test_diagonal_does_not_wrap_around_edge() {
    // (0,13) (1,14) continue at (2,0) (3,1) (4,2) only if rows wrapped
    let board = board_with(&[
        (0, 13, Player::X),
        (1, 14, Player::X),
        (2, 0, Player::X),
        (3, 1, Player::X),
        (4, 2, Player::X),
    ]);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_six_in_a_row_wins() {
    let mut cells = run((9, 3), (0, 1), Player::O);
    cells.push((9, 8, Player::O));
    assert_eq!(check_winner(&board_with(&cells)), Some(Player::O));
}

#[test]
fn test_check_winner_is_idempotent() {
    let board = board_with(&run((4, 4), (1, 0), Player::X));
    let first = check_winner(&board);
    assert_eq!(check_winner(&board), first);
    assert_eq!(check_winner(&board), Some(Player::X));
}
