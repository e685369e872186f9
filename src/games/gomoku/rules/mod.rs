//! Game rules for five-in-a-row.
//!
//! Pure functions over a single board snapshot. Rules are separated from
//! history storage so they can be checked against any snapshot.

pub mod win;

pub use win::{Line, check_winner, lines, winning_line};
