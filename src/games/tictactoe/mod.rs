//! Tic-tac-toe: board model, state queries and minimax search.

mod action;
mod game;
pub mod rules;
mod search;
mod state;
mod types;

pub use action::{Action, InvalidAction};
pub use game::{Game, GameError, GameStatus};
pub use search::{Evaluation, evaluate, max_value, min_value, minimax, principal_variation};
pub use state::{
    current_player, initial_state, is_terminal, legal_actions, result, utility, winner,
};
pub use types::{Board, ParseBoardError, Player, SIZE, Square};

/// Alias for clarity: a mark on the board belongs to a player.
pub type Mark = Player;
