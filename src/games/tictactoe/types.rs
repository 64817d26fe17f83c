//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol used by the compact text format.
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition produces a new board and
/// leaves the one it was derived from untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(squares: [[Square; SIZE]; SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.squares.get(row)?.get(col).copied()
    }

    /// Checks if a square is empty. Off-board coordinates are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns a copy of this board with `(row, col)` set to `square`.
    ///
    /// Callers are responsible for bounds; see `state::result` for the
    /// checked transition.
    pub(crate) fn with(mut self, row: usize, col: usize, square: Square) -> Self {
        self.squares[row][col] = square;
        self
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    /// Iterates over every square in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().flat_map(|row| row.iter().copied())
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter().filter(|&s| s == Square::Occupied(player)).count()
    }

    /// Counts the empty squares.
    pub fn empty_count(&self) -> usize {
        self.iter().filter(|&s| s == Square::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their cell number (1-9) so a human can pick one.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let symbol = match self.squares[row][col] {
                    Square::Empty => (row * SIZE + col + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact form: `XO./.X./..O`. Parses back with [`FromStr`].
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Reads nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and the digits 1-9 are empty.
    /// Whitespace and the separators `|`, `/`, `-`, `+` are skipped, so the
    /// output of both [`Board::display`] and `Display` parse.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '1'..='9' => Square::Empty,
                '|' | '/' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "unexpected symbol {:?}",
                        other
                    )));
                }
            };
            cells.push(square);
        }

        if cells.len() != SIZE * SIZE {
            return Err(ParseBoardError::new(format!(
                "expected {} cells, found {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        let mut board = Board::new();
        for (i, square) in cells.into_iter().enumerate() {
            board.squares[i / SIZE][i % SIZE] = square;
        }
        Ok(board)
    }
}

/// Board text could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid board: {} at {}:{}", message, file, line)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseBoardError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.count(Player::X), 0);
        assert_eq!(board.count(Player::O), 0);
    }

    #[test]
    fn test_from_rows_matches_parse() {
        use Square::{Empty as E, Occupied};
        let (x, o) = (Occupied(Player::X), Occupied(Player::O));
        let board = Board::from_rows([[x, o, E], [E, x, E], [E, E, o]]);
        assert_eq!(board, "XO./.X./..O".parse::<Board>().unwrap());
        assert_eq!(board.rows()[2], [E, E, o]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert!(!board.is_empty(3, 3));
    }

    #[test]
    fn test_parse_compact() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(0, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(1, 1), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(2, 2), Some(Square::Occupied(Player::O)));
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "x o _ | _ x _ | _ _ o".parse().unwrap();
        assert_eq!(board.to_string(), "XO./.X./..O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
        assert_eq!(board.display().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_human_display_numbers_empty_cells() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO.".parse::<Board>().unwrap_err();
        assert!(err.message.contains("expected 9 cells"));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "XO?/.../...".parse::<Board>().unwrap_err();
        assert!(err.message.contains("unexpected symbol"));
    }
}
