#![no_std]

extern crate alloc;

use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Validated board parameters: a square side length and a mine count that
/// leaves at least one safe cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// Side lengths accepted by the interactive game.
    pub const SIZE_RANGE: RangeInclusive<Coord> = 5..=99;

    /// One mine per this many cells unless told otherwise.
    pub const DEFAULT_CELLS_PER_MINE: CellCount = 10;

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidDimension);
        }
        // rejection sampling never terminates on a full board
        if mines >= square(size) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub fn with_default_density(size: Coord) -> Result<Self> {
        Self::new(size, Self::default_mine_count(size))
    }

    pub const fn default_mine_count(size: Coord) -> CellCount {
        square(size) / Self::DEFAULT_CELLS_PER_MINE
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}
