use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// Square grid of [`CellState`]s.
///
/// The side length is fixed at construction. Cells are kept in a row-major
/// `Array2`, so the backing store is laid out as `row * size + col`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<CellState>,
}

impl Board {
    /// Board with every cell `Unrevealed` and no mines.
    pub fn empty(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self {
            cells: Array2::default((size, size).to_nd_index()),
        })
    }

    /// Creates a `size`×`size` board with `mines` mines placed by rejection
    /// sampling from a generator seeded with `seed`.
    pub fn initialize(size: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let config = GameConfig::new(size, mines)?;
        Ok(RandomMineGenerator::new(seed).generate(config))
    }

    pub fn size(&self) -> Coord {
        // both axes are equal and were built from a `Coord`
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let size = self.size();
        row < size && col < size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Overwrites a cell. Does not enforce that revealed cells stay revealed.
    pub fn set(&mut self, coords: Coord2, state: CellState) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords] = state;
        Ok(())
    }

    /// Number of cells currently holding a mine.
    pub fn mine_count(&self) -> CellCount {
        self.count_where(CellState::is_mine)
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.count_where(CellState::is_unrevealed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellState)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        self.cells
            .as_slice_mut()
            .expect("board is always in standard layout")
    }

    fn count_where(&self, predicate: fn(CellState) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|&&cell| predicate(cell))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

/// Unchecked access, panics on out-of-range coordinates.
impl Index<Coord2> for Board {
    type Output = CellState;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
