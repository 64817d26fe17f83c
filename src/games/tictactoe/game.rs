//! Game driver for tic-tac-toe.
//!
//! Wraps the pure state functions for callers that play a game move by
//! move: it keeps the current board and the history of actions, and
//! refuses moves once the game is decided.

use super::action::{Action, InvalidAction};
use super::rules;
use super::state::{current_player, initial_state, result, winner};
use super::types::{Board, Player};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Derives the status of a board.
    pub fn of(board: &Board) -> Self {
        match winner(board) {
            Some(player) => GameStatus::Won(player),
            None if rules::is_draw(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Error that can occur when making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The action cannot be applied to the board.
    #[display("{}", _0)]
    #[from]
    InvalidAction(InvalidAction),
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Action>,
    status: GameStatus,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(initial_state())
    }

    /// Resumes a game from an arbitrary board, with no recorded history.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
            status: GameStatus::of(&board),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actions played in this game, oldest first.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        (!self.status.is_over()).then(|| current_player(&self.board))
    }

    /// Makes a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has ended, or
    /// [`GameError::InvalidAction`] if the cell is occupied or off the board.
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn make_move(&mut self, action: Action) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let player = current_player(&self.board);
        self.board = result(&self.board, action)?;
        self.history.push(action);
        self.status = GameStatus::of(&self.board);

        debug!(%player, row = action.row, col = action.col, status = %self.status, "Move applied");
        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        }
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
