use super::*;

/// Purely random placement: draws uniform linear indices and re-draws on
/// collision until the requested number of distinct mines is on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let mut board = Board::empty(config.size).expect("config size is validated");
        let total_cells = config.total_cells();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut redraws: u32 = 0;

        {
            let cells = board.cells_mut();
            for _ in 0..config.mines {
                loop {
                    let place = usize::from(rng.random_range(0..total_cells));
                    if cells[place].is_mine() {
                        redraws += 1;
                        continue;
                    }
                    cells[place] = CellState::Mine;
                    break;
                }
            }
        }

        log::debug!(
            "Generated {}x{} board with {} mines (seed {}, {} redraws)",
            config.size,
            config.size,
            config.mines,
            self.seed,
            redraws
        );
        board
    }
}
