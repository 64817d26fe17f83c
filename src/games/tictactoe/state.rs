//! State queries and the transition function.
//!
//! Every function here is a pure function of the board value it is given.
//! Boards are well-formed when reachable from [`initial_state`] by
//! alternating legal play; other boards are not validated.

use super::action::{Action, InvalidAction};
use super::rules;
use super::types::{Board, Player, SIZE, Square};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Returns the all-empty starting board.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves whenever both players have placed the same number of marks.
#[instrument(level = "trace", skip_all)]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell.
///
/// The set iterates in row-major order, which fixes the search's
/// tie-break preference.
#[instrument(level = "trace", skip_all)]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
        .filter(|action| board.is_empty(action.row, action.col))
        .collect()
}

/// Returns the board produced by the player to move taking `action`.
///
/// The input board is never modified.
///
/// # Errors
///
/// [`InvalidAction::OutOfBounds`] if the coordinates are off the board,
/// [`InvalidAction::Occupied`] if the cell already holds a mark.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    if !action.in_bounds() {
        debug!(row = action.row, col = action.col, "Rejected out-of-bounds action");
        return Err(InvalidAction::OutOfBounds(action));
    }
    if !board.is_empty(action.row, action.col) {
        debug!(row = action.row, col = action.col, "Rejected action on occupied square");
        return Err(InvalidAction::Occupied(action));
    }

    let player = current_player(board);
    Ok(board.with(action.row, action.col, Square::Occupied(player)))
}

/// Returns the winner of the game, if there is one.
#[instrument(level = "trace", skip_all)]
pub fn winner(board: &Board) -> Option<Player> {
    rules::check_winner(board)
}

/// Whether the game is over: someone has won or no empty cell remains.
#[instrument(level = "trace", skip_all)]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || rules::is_full(board)
}

/// Outcome from X's point of view: `1` if X has won, `-1` if O has won,
/// `0` otherwise.
///
/// Only meaningful on terminal boards.
#[instrument(level = "trace", skip_all)]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
