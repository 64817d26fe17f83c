//! Strictly Minimax - Unified CLI
//!
//! Perfect tic-tac-toe play by exhaustive minimax search.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, MarkArg, OutputFormat};
use serde::Serialize;
use std::path::Path;
use strictly_minimax::{
    Action, Board, GameEvent, GameStatus, HumanPlayer, MinimaxPlayer, Orchestrator, PlayConfig,
    Player, TicTacToePlayer as Mark, current_player, evaluate, initial_state, is_terminal,
    principal_variation, result,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_minimax=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::BestMove { board, format } => run_best_move(&board, format),
        Command::Play { config, human } => run_play(&config, human),
        Command::SelfPlay => run_self_play(),
    }
}

/// Answer to `best-move`.
#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: String,
    to_move: Option<Mark>,
    status: GameStatus,
    action: Option<Action>,
    value: i8,
}

impl BestMoveReport {
    /// Searches `board` and collects the answer.
    fn new(board: &Board) -> Self {
        let evaluation = evaluate(board);
        Self {
            board: board.to_string(),
            to_move: (!is_terminal(board)).then(|| current_player(board)),
            status: GameStatus::of(board),
            action: *evaluation.action(),
            value: *evaluation.value(),
        }
    }

    /// Formats the report for printing.
    fn render(&self, board: &Board, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Text => {
                let verdict = match (self.to_move, self.action) {
                    (Some(mark), Some(action)) => format!(
                        "{} to move: play {} (cell {})\nValue under perfect play: {}",
                        mark,
                        action,
                        action.cell(),
                        describe_value(self.value)
                    ),
                    _ => format!("Game over: {}", self.status),
                };
                format!("{}\n\n{}", board.display(), verdict)
            }
        })
    }
}

/// Print the optimal move for a board
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, format: OutputFormat) -> Result<()> {
    let report = BestMoveReport::new(board);
    info!(action = ?report.action, value = report.value, "Best move computed");
    println!("{}", report.render(board, format)?);
    Ok(())
}

/// Play against the engine on the terminal
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: &Path, human: Option<MarkArg>) -> Result<()> {
    let mut config = PlayConfig::load_or_default(config_path)?;
    if let Some(mark) = human {
        info!(?mark, "Overriding human mark");
        config = config.with_human_mark(mark.into());
    }

    let human_player: Box<dyn Player> = Box::new(HumanPlayer::new(
        config.human_name().clone(),
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let engine: Box<dyn Player> = Box::new(MinimaxPlayer::new(config.engine_name().clone()));
    let (player_x, player_o) = match config.human_mark() {
        Mark::X => (human_player, engine),
        Mark::O => (engine, human_player),
    };

    let show_evaluation = *config.show_evaluation();
    println!("{}\n", Board::new().display());

    let mut orchestrator = Orchestrator::new(player_x, player_o);
    orchestrator.run(|event| match event {
        GameEvent::MoveMade {
            player,
            mark,
            action,
            board,
            evaluation,
        } => {
            println!("{} ({}) plays cell {}\n", player, mark, action.cell());
            println!("{}\n", board.display());
            let shown = evaluation.filter(|_| show_evaluation && !is_terminal(board));
            if let Some(evaluation) = shown {
                let value = describe_value(*evaluation.value());
                println!("{} expects: {}\n", player, value);
            }
        }
        GameEvent::GameOver { winner, status } => match winner {
            Some(name) => println!("{} ({})", status, name),
            None => println!("Game over: {}", status),
        },
    })?;

    Ok(())
}

/// Let the engine play both sides from the empty board
#[instrument]
fn run_self_play() -> Result<()> {
    let mut board = initial_state();
    for action in principal_variation(&board) {
        let mark = current_player(&board);
        board = result(&board, action)?;
        println!("{} plays {}\n{}\n", mark, action, board.display());
    }
    println!("Result: {}", GameStatus::of(&board));
    Ok(())
}

/// Names a minimax value from X's point of view.
fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}
