//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// Every winning line as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line holding three of that
/// player's marks, `None` otherwise. Every row, column and diagonal is
/// checked on its own.
#[instrument(level = "trace", skip_all)]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a.0, a.1)?;
        match sq {
            Square::Occupied(player)
                if Some(sq) == board.get(b.0, b.1) && Some(sq) == board.get(c.0, c.1) =>
            {
                Some(player)
            }
            _ => None,
        }
    })
}
