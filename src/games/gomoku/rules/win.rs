//! Win detection logic for five-in-a-row.

use super::super::{BOARD_SIZE, Board, LINE_LENGTH, Player, Square};
use std::sync::LazyLock;
use tracing::instrument;

/// Cell indices of one candidate winning run.
pub type Line = [usize; LINE_LENGTH];

static LINES: LazyLock<Vec<Line>> = LazyLock::new(enumerate_lines);

/// All candidate lines, in evaluation order.
///
/// Horizontal runs of each row are interleaved with the vertical runs of the
/// matching column, followed by both diagonal directions.
pub fn lines() -> &'static [Line] {
    &LINES
}

fn enumerate_lines() -> Vec<Line> {
    let span = BOARD_SIZE - LINE_LENGTH;
    let mut lines = Vec::with_capacity(2 * BOARD_SIZE * (span + 1) + 2 * (span + 1) * (span + 1));

    // Rows and columns
    for i in 0..BOARD_SIZE {
        for j in 0..=span {
            lines.push(std::array::from_fn(|k| i * BOARD_SIZE + j + k));
            lines.push(std::array::from_fn(|k| (j + k) * BOARD_SIZE + i));
        }
    }

    // Diagonals
    for i in 0..=span {
        for j in 0..=span {
            lines.push(std::array::from_fn(|k| (i + k) * BOARD_SIZE + j + k));
            lines.push(std::array::from_fn(|k| {
                (i + k) * BOARD_SIZE + BOARD_SIZE - 1 - (j + k)
            }));
        }
    }

    lines
}

/// Returns the player filling `line`, if all five squares hold the same mark.
fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let [first, rest @ ..] = line;
    let player = board.get(*first)?.player()?;
    rest.iter()
        .all(|&i| board.get(i) == Some(Square::Occupied(player)))
        .then_some(player)
}

/// Finds the first completed line and its owner.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    lines()
        .iter()
        .find_map(|line| line_owner(board, line).map(|player| (player, *line)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has five in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
