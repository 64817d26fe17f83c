//! Strictly Minimax library - perfect tic-tac-toe by exhaustive search
//!
//! The core is a pure board model and a minimax search over every
//! reachable board. Around it sit a move-by-move game driver, players
//! (human and engine) and an orchestrator that runs a game between two
//! players.
//!
//! # Architecture
//!
//! - **Games**: board model, state queries, transition and search
//! - **Players**: human input and the minimax engine behind one trait
//! - **Orchestrator**: drives two players through a game
//! - **Config**: TOML settings for interactive play
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, initial_state, minimax, result};
//!
//! let board = initial_state();
//! let board = result(&board, Action::new(0, 0)).unwrap();
//! // The only reply to a corner opening that does not lose is the center.
//! assert_eq!(minimax(&board), Some(Action::new(1, 1)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{HumanPlayer, MinimaxPlayer, Player};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, Evaluation, Game, GameError, GameStatus, InvalidAction, Mark,
    ParseBoardError, Player as TicTacToePlayer, SIZE, Square, current_player, evaluate,
    initial_state, is_terminal, legal_actions, max_value, min_value, minimax,
    principal_variation, result, rules, utility, winner,
};
