//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Action, Evaluation, Game};
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses the next action for the player to move in `game`.
    fn choose(&mut self, game: &Game) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// The search result behind the most recent choice, for players that
    /// search.
    fn last_evaluation(&self) -> Option<Evaluation> {
        None
    }
}
