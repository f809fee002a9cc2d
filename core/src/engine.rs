use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of a single [`play_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Safe,
    HitMine,
}

/// Counts mines in the Moore neighbourhood of `coords`, clipped at the edges.
pub fn adjacency_score(board: &Board, coords: Coord2) -> u8 {
    board
        .iter_neighbors(coords)
        .filter(|&pos| board[pos].is_mine())
        .count() as u8
}

/// Reveals `coords` and, when its score is zero, floods into every connected
/// unrevealed cell. Coordinates outside the grid are ignored.
///
/// Must not be called on a mine: the cell would be overwritten with its score.
/// [`play_move`] performs that check.
pub fn reveal(board: &mut Board, coords: Coord2) {
    if !board.contains(coords) {
        log::warn!("Ignoring reveal outside the board at {coords:?}");
        return;
    }

    let mut pending = Vec::from([coords]);
    let mut revealed: CellCount = 0;

    while let Some(visit_coords) = pending.pop() {
        // a neighbour may have been queued twice before it got revealed
        if board[visit_coords].is_revealed() {
            continue;
        }

        let score = adjacency_score(board, visit_coords);
        board[visit_coords] = CellState::Revealed(score);
        revealed += 1;

        if score == 0 {
            pending.extend(
                board
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| board[pos].is_unrevealed()),
            );
        }
    }

    log::trace!("Revealed {revealed} cells from {coords:?}");
}

/// Applies a move: a mine leaves the board untouched and reports `HitMine`,
/// anything else is revealed.
pub fn play_move(board: &mut Board, coords: Coord2) -> Result<MoveResult> {
    let coords = board.validate_coords(coords)?;

    let cell = board[coords];
    Ok(match cell {
        CellState::Mine => MoveResult::HitMine,
        CellState::Unrevealed => {
            reveal(board, coords);
            MoveResult::Safe
        }
        CellState::Revealed(_) => MoveResult::Safe,
    })
}

/// True once no cell is left `Unrevealed`. Mines never need to be touched.
pub fn check_winner(board: &Board) -> bool {
    !board.iter().any(|(_, cell)| cell.is_unrevealed())
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game session over an owned [`Board`].
///
/// State transitions:
/// - InProgress -> Lost, on hitting a mine
/// - InProgress -> Won, when a safe move leaves no unrevealed cell
/// - InProgress -> InProgress, otherwise
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn play(&mut self, coords: Coord2) -> Result<GameState> {
        if self.state.is_finished() {
            log::warn!("Move at {coords:?} after the game ended");
            return Err(GameError::AlreadyEnded);
        }

        match play_move(&mut self.board, coords)? {
            MoveResult::HitMine => {
                self.triggered_mine = Some(coords);
                self.state = GameState::Lost;
            }
            MoveResult::Safe if check_winner(&self.board) => {
                self.state = GameState::Won;
            }
            MoveResult::Safe => {}
        }

        log::debug!("Played {coords:?}, game is {:?}", self.state);
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        FixedMineGenerator::from_mine_coords(size, mines)
            .unwrap()
            .build(size)
            .unwrap()
    }

    fn board_from_indices(size: Coord, indices: &[CellCount]) -> Board {
        FixedMineGenerator::from_mine_indices(size, indices)
            .unwrap()
            .build(size)
            .unwrap()
    }

    /// Applies `f` to every coordinate of a `size`×`size` board.
    fn transformed(size: Coord, mines: &[Coord2], f: impl Fn(Coord2) -> Coord2) -> Board {
        let mines: Vec<Coord2> = mines.iter().copied().map(&f).collect();
        board(size, &mines)
    }

    #[test]
    fn adjacency_score_counts_clipped_neighbors() {
        let board = board(5, &[(0, 0), (0, 1), (1, 0), (2, 2)]);

        assert_eq!(adjacency_score(&board, (1, 1)), 4);
        assert_eq!(adjacency_score(&board, (0, 0)), 2);
        assert_eq!(adjacency_score(&board, (4, 4)), 0);
        assert_eq!(adjacency_score(&board, (3, 3)), 1);
    }

    #[test]
    fn adjacency_score_ignores_center_mine() {
        let board = board(3, &[(1, 1)]);

        assert_eq!(adjacency_score(&board, (1, 1)), 0);
    }

    #[test]
    fn adjacency_score_is_invariant_under_board_transforms() {
        let size = 6;
        let last = size - 1;
        let mines = [(0, 1), (2, 3), (4, 4), (5, 0), (1, 5)];
        let base = board(size, &mines);

        let transforms: [fn(Coord2, Coord) -> Coord2; 3] = [
            |(r, c), last| (r, last - c),
            |(r, c), last| (last - r, c),
            |(r, c), last| (c, last - r),
        ];

        for transform in transforms {
            let moved = transformed(size, &mines, |pos| transform(pos, last));
            for (pos, _) in base.iter() {
                assert_eq!(
                    adjacency_score(&base, pos),
                    adjacency_score(&moved, transform(pos, last)),
                    "at {pos:?}"
                );
            }
        }
    }

    #[test]
    fn nonzero_cell_reveals_only_itself() {
        let mut board = board(5, &[(0, 0)]);

        reveal(&mut board, (1, 1));

        assert_eq!(board[(1, 1)], CellState::Revealed(1));
        assert_eq!(board.unrevealed_count(), 23);
    }

    #[test]
    fn reveal_outside_grid_is_ignored() {
        let mut board = board(5, &[(0, 0)]);
        let before = board.clone();

        reveal(&mut board, (5, 0));
        reveal(&mut board, (0, 200));

        assert_eq!(board, before);
    }

    #[test]
    fn flood_fill_stops_at_numbered_border() {
        // a wall of mines in column 2 splits the board
        let mut board = board(5, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);

        reveal(&mut board, (0, 4));

        for row in 0..5 {
            assert_eq!(board[(row, 4)], CellState::Revealed(0));
            assert!(board[(row, 3)].count().is_some_and(|count| count > 0));
            assert_eq!(board[(row, 2)], CellState::Mine);
            assert!(board[(row, 1)].is_unrevealed());
            assert!(board[(row, 0)].is_unrevealed());
        }
    }

    #[test]
    fn flood_fill_reveals_maximal_zero_region_and_its_border() {
        let mut board = board(7, &[(3, 3)]);

        reveal(&mut board, (0, 0));

        assert!(check_winner(&board));
        for (pos, cell) in board.iter() {
            if pos == (3, 3) {
                assert_eq!(cell, CellState::Mine);
            } else {
                assert_eq!(cell, CellState::Revealed(adjacency_score(&board, pos)));
            }
        }
    }

    #[test]
    fn flood_fill_covers_largest_board_from_a_corner() {
        let mut board = Board::initialize(99, 0, 1).unwrap();

        reveal(&mut board, (0, 0));

        assert!(check_winner(&board));
        assert!(board.iter().all(|(_, cell)| cell == CellState::Revealed(0)));
    }

    #[test]
    fn revealed_cells_are_never_rewritten() {
        let mut board = board(5, &[(2, 2)]);
        board[(4, 4)] = CellState::Revealed(7);

        reveal(&mut board, (4, 0));

        assert_eq!(board[(4, 4)], CellState::Revealed(7));
    }

    #[test]
    fn play_move_on_mine_does_not_mutate() {
        let mut board = board_from_indices(5, &[0, 6, 18]);
        board[(4, 0)] = CellState::Revealed(0);
        let before = board.clone();

        assert_eq!(play_move(&mut board, (1, 1)), Ok(MoveResult::HitMine));
        assert_eq!(board, before);
    }

    #[test]
    fn play_move_rejects_out_of_bounds() {
        let mut board = board(5, &[]);

        assert_eq!(play_move(&mut board, (5, 5)), Err(GameError::OutOfBounds));
        assert_eq!(board.unrevealed_count(), 25);
    }

    #[test]
    fn corner_flood_stops_around_known_mines() {
        let mut board = board_from_indices(5, &[0, 6, 18]);

        assert_eq!(play_move(&mut board, (4, 4)), Ok(MoveResult::Safe));

        assert_eq!(board[(0, 0)], CellState::Mine);
        assert_eq!(board[(1, 1)], CellState::Mine);
        assert_eq!(board[(3, 3)], CellState::Mine);

        // every revealed cell carries its true score, zeros never touch a mine
        for (pos, cell) in board.iter() {
            if let Some(count) = cell.count() {
                assert_eq!(count, adjacency_score(&board, pos), "at {pos:?}");
            }
        }
        // the bottom-right corner only borders (3, 3)
        assert_eq!(board[(4, 4)], CellState::Revealed(1));
        assert_eq!(board.unrevealed_count(), 22 - 1);
    }

    #[test]
    fn corner_zero_region_floods_until_mine_neighbors() {
        let mut board = board_from_indices(5, &[0, 6, 18]);

        assert_eq!(play_move(&mut board, (0, 4)), Ok(MoveResult::Safe));

        assert_eq!(board[(0, 4)], CellState::Revealed(0));
        assert_eq!(board[(0, 3)], CellState::Revealed(0));
        assert_eq!(board[(1, 3)], CellState::Revealed(0));
        assert_eq!(board[(1, 4)], CellState::Revealed(0));
        assert_eq!(board[(0, 2)], CellState::Revealed(1));
        assert_eq!(board[(1, 2)], CellState::Revealed(1));
        assert_eq!(board[(2, 3)], CellState::Revealed(1));
        assert_eq!(board[(2, 4)], CellState::Revealed(1));
        assert_eq!(board[(2, 2)], CellState::Revealed(2));
        assert_eq!(board[(0, 1)], CellState::Unrevealed);
        assert_eq!(board[(2, 1)], CellState::Unrevealed);
        assert_eq!(board.unrevealed_count(), 22 - 9);
    }

    #[test]
    fn empty_board_is_won_only_after_every_cell_is_revealed() {
        let mut board = Board::initialize(5, 0, 1).unwrap();
        assert!(!check_winner(&board));

        for row in 0..5 {
            for col in 0..5 {
                assert!(!check_winner(&board));
                board.set((row, col), CellState::Revealed(0)).unwrap();
            }
        }

        assert!(check_winner(&board));
    }

    #[test]
    fn single_move_on_empty_board_wins() {
        let mut board = Board::initialize(5, 0, 1).unwrap();

        assert_eq!(play_move(&mut board, (2, 2)), Ok(MoveResult::Safe));
        assert!(check_winner(&board));
    }

    #[test]
    fn last_safe_cell_wins_immediately() {
        let mut board = Board::initialize(5, 24, 99).unwrap();
        let (safe, _) = board
            .iter()
            .find(|(_, cell)| cell.is_unrevealed())
            .unwrap();
        let expected = board.iter_neighbors(safe).count() as u8;

        assert_eq!(play_move(&mut board, safe), Ok(MoveResult::Safe));
        assert_eq!(board[safe], CellState::Revealed(expected));
        assert!(check_winner(&board));
    }

    #[test]
    fn game_transitions_to_lost_and_rejects_further_moves() {
        let mut game = Game::new(board(5, &[(2, 2)]));

        assert_eq!(game.play((2, 2)), Ok(GameState::Lost));
        assert_eq!(game.triggered_mine(), Some((2, 2)));
        assert!(game.is_finished());
        assert_eq!(game.play((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(game.board()[(2, 2)], CellState::Mine);
    }

    #[test]
    fn game_stays_in_progress_until_won() {
        let mut game = Game::new(board(5, &[(0, 0), (4, 4)]));

        assert_eq!(game.play((0, 1)), Ok(GameState::InProgress));
        assert_eq!(game.play((0, 1)), Ok(GameState::InProgress));
        assert_eq!(game.play((2, 2)), Ok(GameState::Won));
        assert_eq!(game.triggered_mine(), None);
    }

    #[test]
    fn game_reports_bad_coordinates_without_ending() {
        let mut game = Game::new(board(5, &[(0, 0)]));

        assert_eq!(game.play((9, 9)), Err(GameError::OutOfBounds));
        assert_eq!(game.state(), GameState::InProgress);
    }
}
