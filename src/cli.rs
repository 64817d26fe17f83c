//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_minimax::{Board, DEFAULT_CONFIG_PATH, TicTacToePlayer as Player};

/// Strictly Minimax - perfect tic-tac-toe by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Perfect tic-tac-toe play by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a board
    BestMove {
        /// Board as nine cells in row-major order, e.g. "XO./.X./..O"
        #[arg(short, long)]
        board: Board,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Play against the engine on the terminal
    Play {
        /// Path to the play configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: std::path::PathBuf,

        /// Mark to play as (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<MarkArg>,
    },

    /// Let the engine play both sides from the empty board
    SelfPlay,
}

/// Output format for `best-move`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// A single JSON object
    Json,
}

/// Mark selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Play X (moves first)
    X,
    /// Play O (moves second)
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}
