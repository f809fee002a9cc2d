use std::fmt;

use minefield_core::{Board, CellState};

const UNREVEALED: char = '.';
const MINE: char = '*';

/// Text rendering of a board with 1-indexed row and column headers.
///
/// While a game is running mines are drawn like any other unrevealed cell,
/// once it is over they are shown with their own glyph.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    show_mines: bool,
}

impl<'a> BoardView<'a> {
    pub fn hidden(board: &'a Board) -> Self {
        Self {
            board,
            show_mines: false,
        }
    }

    pub fn revealed(board: &'a Board) -> Self {
        Self {
            board,
            show_mines: true,
        }
    }

    fn glyph(&self, cell: CellState) -> char {
        match cell {
            CellState::Unrevealed => UNREVEALED,
            CellState::Mine if self.show_mines => MINE,
            CellState::Mine => UNREVEALED,
            // counts never exceed 8
            CellState::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();

        write!(f, "     ")?;
        for col in 1..=size {
            write!(f, "{col:2} ")?;
        }
        write!(f, "\n-----")?;
        for _ in 0..size {
            write!(f, "---")?;
        }
        writeln!(f)?;

        for (row, cells) in (1..=size).zip(self.board.rows()) {
            write!(f, "{row:2} | ")?;
            for cell in cells {
                write!(f, "{:>2} ", self.glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
