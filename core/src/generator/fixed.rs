use alloc::vec::Vec;

use super::*;

/// Places mines at caller-chosen positions. Used to replay a known layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidDimension);
        }
        let mut mines = Vec::with_capacity(mine_coords.len());
        for &(row, col) in mine_coords {
            if row >= size || col >= size {
                return Err(GameError::OutOfBounds);
            }
            if !mines.contains(&(row, col)) {
                mines.push((row, col));
            }
        }
        if mines.len() >= usize::from(square(size)) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self { mines })
    }

    /// Same as [`Self::from_mine_coords`] with row-major linear indices.
    pub fn from_mine_indices(size: Coord, indices: &[CellCount]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidDimension);
        }
        let total_cells = square(size);
        let coords = indices
            .iter()
            .map(|&index| {
                if index < total_cells {
                    Ok(coords_from_linear(index, size))
                } else {
                    Err(GameError::OutOfBounds)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_mine_coords(size, &coords)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    /// Builds the board directly, deriving the config from the positions.
    pub fn build(self, size: Coord) -> Result<Board> {
        let config = GameConfig::new(size, self.mine_count())?;
        Ok(self.generate(config))
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let mut board = Board::empty(config.size).expect("config size is validated");
        for coords in self.mines {
            if board.set(coords, CellState::Mine).is_err() {
                log::warn!("Skipping mine at {coords:?}, outside of {}x{}", config.size, config.size);
            }
        }
        if board.mine_count() != config.mines {
            log::warn!(
                "Fixed layout count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines
            );
        }
        board
    }
}
