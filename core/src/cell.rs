use serde::{Deserialize, Serialize};

/// State of a single grid position.
///
/// A `Mine` is only ever placed at generation time, and a `Revealed` cell keeps
/// the adjacency count it was revealed with for the rest of the game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Unrevealed,
    Mine,
    Revealed(u8),
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Unrevealed)
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    /// Adjacency count of a revealed cell.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}
