//! First-class action types for tic-tac-toe.
//!
//! An action names a cell to fill. Which player fills it is never part of
//! the action: the board itself decides whose turn it is.

use super::types::SIZE;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` cell coordinate.
///
/// The derived ordering compares `row` then `col`, so ordered collections
/// of actions iterate in row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Action {
    /// Row index (0 at the top).
    pub row: usize,
    /// Column index (0 at the left).
    pub col: usize,
}

impl Action {
    /// Creates an action from a 1-9 cell number, as shown by `Board::display`.
    pub fn from_cell(cell: usize) -> Option<Self> {
        (1..=SIZE * SIZE)
            .contains(&cell)
            .then(|| Self::new((cell - 1) / SIZE, (cell - 1) % SIZE))
    }

    /// Returns the 1-9 cell number of this action.
    pub fn cell(&self) -> usize {
        self.row * SIZE + self.col + 1
    }

    /// Whether both coordinates lie on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An action that cannot be applied to a board.
///
/// Raised by the transition function; the board it was applied to is left
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidAction {
    /// The targeted square is already occupied.
    #[display("Invalid action {}: square is already occupied", _0)]
    Occupied(#[error(not(source))] Action),

    /// The coordinates lie outside the 3x3 grid.
    #[display("Invalid action {}: position out of bounds (must be 0-2)", _0)]
    OutOfBounds(#[error(not(source))] Action),
}

impl InvalidAction {
    /// The rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::Occupied(action) | InvalidAction::OutOfBounds(action) => *action,
        }
    }
}
