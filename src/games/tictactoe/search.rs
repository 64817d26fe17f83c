//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. The search explores every
//! reachable board by direct recursion: depth is bounded by the nine
//! cells, so no pruning or caching is done.
//!
//! Ties are broken by the row-major order of [`legal_actions`]: an action
//! replaces the current best only when its value is strictly better, so the
//! first optimal action in row-major order is the one returned.

use super::action::Action;
use super::state::{current_player, is_terminal, legal_actions, result, utility};
use super::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Game-theoretic value of a board and the action achieving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Evaluation {
    /// Utility under optimal play by both sides: -1, 0 or 1.
    value: i8,
    /// Best action for the player to move; `None` on terminal boards.
    action: Option<Action>,
}

/// Returns the optimal action for the player to move, or `None` if the
/// game is already decided.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Action> {
    if is_terminal(board) {
        debug!("Board is terminal, no action");
        return None;
    }
    evaluate(board).action
}

/// Evaluates `board` for the player to move.
///
/// Terminal boards evaluate to their [`utility`] with no action.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let evaluation = match current_player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    };
    debug!(
        value = evaluation.value,
        action = ?evaluation.action,
        "Search complete"
    );
    evaluation
}

/// Best outcome X can force from `board`.
#[instrument(level = "trace", skip_all)]
pub fn max_value(board: &Board) -> Evaluation {
    if is_terminal(board) {
        return Evaluation::new(utility(board), None);
    }

    let mut best = Evaluation::new(i8::MIN, None);
    for (action, next) in successors(board) {
        let value = min_value(&next).value;
        if value > best.value {
            trace!(row = action.row, col = action.col, value, "New best for X");
            best = Evaluation::new(value, Some(action));
        }
    }
    best
}

/// Best outcome O can force from `board`.
#[instrument(level = "trace", skip_all)]
pub fn min_value(board: &Board) -> Evaluation {
    if is_terminal(board) {
        return Evaluation::new(utility(board), None);
    }

    let mut best = Evaluation::new(i8::MAX, None);
    for (action, next) in successors(board) {
        let value = max_value(&next).value;
        if value < best.value {
            trace!(row = action.row, col = action.col, value, "New best for O");
            best = Evaluation::new(value, Some(action));
        }
    }
    best
}

/// Each legal action paired with the board it produces, in row-major order.
///
/// `legal_actions` only yields empty on-board cells, so the child is built
/// directly instead of through the checked [`result`].
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = Square::Occupied(current_player(board));
    legal_actions(board)
        .into_iter()
        .map(move |action| (action, board.with(action.row, action.col, mark)))
}

/// The line of play from `board` when both sides follow [`minimax`] until
/// the game ends.
#[instrument(skip(board), fields(board = %board))]
pub fn principal_variation(board: &Board) -> Vec<Action> {
    let mut line = Vec::new();
    let mut board = *board;
    while let Some(action) = minimax(&board) {
        let Ok(next) = result(&board, action) else {
            break;
        };
        line.push(action);
        board = next;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::state::initial_state;

    #[test]
    fn test_terminal_board_has_no_action() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&board), None);
        assert_eq!(evaluate(&board), Evaluation::new(1, None));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        // X to move (2 X, 2 O); (0, 2) completes the top row.
        let board: Board = "XX./.O./..O".parse().unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
        assert_eq!(*evaluate(&board).value(), 1);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move (3 X, 2 O); (1, 2) completes the middle row.
        let board: Board = "XX./OO./X..".parse().unwrap();
        assert_eq!(current_player(&board), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(1, 2)));
        assert_eq!(*evaluate(&board).value(), -1);
    }

    #[test]
    fn test_o_blocks_threat() {
        // X threatens the top row; O must block at (0, 2).
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let evaluation = evaluate(&initial_state());
        assert_eq!(*evaluation.value(), 0);
        // Every opening draws; the first in row-major order is kept.
        assert_eq!(*evaluation.action(), Some(Action::new(0, 0)));
    }

    #[test]
    fn test_successors_match_checked_transition() {
        let board: Board = "XO./.X./...".parse().unwrap();
        let children: Vec<_> = successors(&board).collect();

        assert_eq!(children.len(), legal_actions(&board).len());
        for (action, next) in children {
            assert_eq!(next, result(&board, action).unwrap());
            assert_eq!(
                next.get(action.row, action.col),
                Some(Square::Occupied(Player::O))
            );
        }
    }

    #[test]
    fn test_principal_variation_ends_in_draw() {
        let start = initial_state();
        let line = principal_variation(&start);
        assert_eq!(line.len(), 9);

        let end = line
            .iter()
            .fold(start, |board, &action| result(&board, action).unwrap());
        assert!(is_terminal(&end));
        assert_eq!(utility(&end), 0);
    }
}
