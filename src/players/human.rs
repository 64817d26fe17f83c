//! Human player reading moves from a line-based input.

use super::Player;
use crate::games::tictactoe::{Action, Game, result};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player reading one move per line.
///
/// A line holds either a cell number 1-9 (as printed by `Board::display`)
/// or a zero-based `row col` pair separated by whitespace or a comma.
/// Unreadable or illegal moves are reported and the player is asked again.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}, your move (1-9 or `row col`): ", self.name)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read move")?;
        Ok((read > 0).then_some(line))
    }
}

/// Parses a cell number or a `row col` pair.
pub fn parse_action(line: &str) -> Option<Action> {
    let parts: Vec<usize> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [cell] => Action::from_cell(*cell),
        [row, col] => Some(Action::new(*row, *col)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn choose(&mut self, game: &Game) -> Result<Action> {
        loop {
            let Some(line) = self.prompt()? else {
                anyhow::bail!("Input closed before {} moved", self.name);
            };

            let Some(action) = parse_action(&line) else {
                debug!(input = line.trim(), "Unreadable move");
                writeln!(self.output, "Could not read {:?}, try again.", line.trim())?;
                continue;
            };

            match result(game.board(), action) {
                Ok(_) => return Ok(action),
                Err(e) => {
                    debug!(error = %e, "Illegal move");
                    writeln!(self.output, "{}, try again.", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
