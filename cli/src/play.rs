use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::Context;
use minefield_core::{Coord, Game, GameState};

use crate::render::BoardView;

/// How an interactive session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
}

/// Whitespace separated tokens read lazily from line based input.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line).context("reading move")? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next 1-indexed coordinate in `1..=size`, converted to 0-indexed.
    /// Anything else, including end of input, means the player wants to stop.
    fn next_coord(&mut self, size: Coord) -> anyhow::Result<Option<Coord>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        Ok(token
            .parse::<Coord>()
            .ok()
            .filter(|value| (1..=size).contains(value))
            .map(|value| value - 1))
    }
}

/// Runs the prompt/move loop until the game ends or the player quits.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    output: &mut W,
) -> anyhow::Result<SessionEnd> {
    let size = game.board().size();
    let mut tokens = Tokens::new(input);

    loop {
        write!(output, "{}", BoardView::hidden(game.board()))?;
        write!(
            output,
            "\nPick a row (1-{size}) and column (1-{size}) to play!\nEnter 0 to exit: "
        )?;
        output.flush()?;

        let Some(row) = tokens.next_coord(size)? else {
            return quit(output);
        };
        let Some(col) = tokens.next_coord(size)? else {
            return quit(output);
        };

        writeln!(output, "Playing ({}, {})...\n", row + 1, col + 1)?;
        match game.play((row, col))? {
            GameState::InProgress => {}
            GameState::Lost => {
                write!(output, "{}", BoardView::revealed(game.board()))?;
                writeln!(output, "\nBOOM! You hit a mine!")?;
                return Ok(SessionEnd::Lost);
            }
            GameState::Won => {
                write!(output, "{}", BoardView::revealed(game.board()))?;
                writeln!(output, "\nYou Win!")?;
                return Ok(SessionEnd::Won);
            }
        }
    }
}

fn quit<W: Write>(output: &mut W) -> anyhow::Result<SessionEnd> {
    writeln!(output, "\nThanks for playing!")?;
    Ok(SessionEnd::Quit)
}
