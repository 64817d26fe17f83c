//! Engine player backed by exhaustive minimax search.

use super::Player;
use crate::games::tictactoe::{Action, Evaluation, Game, evaluate};
use anyhow::Result;
use tracing::{debug, instrument};

/// Plays the optimal action found by [`evaluate`].
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
    last_evaluation: Option<Evaluation>,
}

impl MinimaxPlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_evaluation: None,
        }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn choose(&mut self, game: &Game) -> Result<Action> {
        let evaluation = evaluate(game.board());
        self.last_evaluation = Some(evaluation);

        let action = (*evaluation.action())
            .ok_or_else(|| anyhow::anyhow!("No legal actions: game is already decided"))?;
        debug!(
            row = action.row,
            col = action.col,
            value = *evaluation.value(),
            "Engine chose action"
        );
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_evaluation(&self) -> Option<Evaluation> {
        self.last_evaluation
    }
}
