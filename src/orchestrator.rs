//! Game orchestration between players.

use crate::games::tictactoe::{Action, Board, Evaluation, Game, GameStatus, Player as Mark};
use crate::players::Player;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Events reported to the caller while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell filled.
        action: Action,
        /// Board after the move.
        board: Board,
        /// The mover's own search result, if it searched.
        evaluation: Option<Evaluation>,
    },
    /// The game ended.
    GameOver {
        /// Name of the winner, `None` on a draw.
        winner: Option<String>,
        /// Final status.
        status: GameStatus,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator<'a> {
    game: Game,
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
}

impl<'a> Orchestrator<'a> {
    /// Creates a new orchestrator on the empty board.
    pub fn new(player_x: Box<dyn Player + 'a>, player_o: Box<dyn Player + 'a>) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game ends, reporting each event to
    /// `on_event`.
    ///
    /// # Errors
    ///
    /// Propagates a player's failure to produce a move, or an illegal move
    /// returned by a player.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent)) -> Result<GameStatus> {
        info!("Starting game orchestration");

        while let Some(mark) = self.game.to_move() {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let action = player.choose(&self.game)?;
            self.game.make_move(action)?;

            on_event(&GameEvent::MoveMade {
                player: player.name().to_string(),
                mark,
                action,
                board: *self.game.board(),
                evaluation: player.last_evaluation(),
            });
        }

        let status = self.game.status();
        let winner = match status {
            GameStatus::Won(Mark::X) => Some(self.player_x.name().to_string()),
            GameStatus::Won(Mark::O) => Some(self.player_o.name().to_string()),
            _ => None,
        };
        info!(%status, winner = ?winner, "Game finished");
        on_event(&GameEvent::GameOver { winner, status });

        Ok(status)
    }
}
