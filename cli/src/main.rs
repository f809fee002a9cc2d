use std::io;
use std::process::ExitCode;

use clap::Parser;
use minefield_core::{Board, CellCount, Coord, Game, GameConfig};

mod play;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the minefield without stepping on a mine", long_about = None)]
struct Args {
    /// Side length of the square board (5-99)
    size: i64,

    /// Number of mines, defaults to one per ten cells
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of using the clock
    #[arg(short, long)]
    seed: Option<u64>,

    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    fn game_config(&self) -> Option<GameConfig> {
        let size = Coord::try_from(self.size)
            .ok()
            .filter(|size| GameConfig::SIZE_RANGE.contains(size))?;
        match self.mines {
            Some(mines) => GameConfig::new(size, mines).ok(),
            None => GameConfig::with_default_density(size).ok(),
        }
    }
}

fn clock_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let Some(config) = args.game_config() else {
        log::error!("Rejected size {} with mines {:?}", args.size, args.mines);
        let (min, max) = GameConfig::SIZE_RANGE.into_inner();
        println!("Please enter a valid row size between {min}-{max}");
        println!("Ex: minefield 10");
        return Ok(ExitCode::FAILURE);
    };

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Starting {}x{} game with {} mines", config.size, config.size, config.mines);
    let board = Board::initialize(config.size, config.mines, seed)?;
    let mut game = Game::new(board);

    let stdin = io::stdin();
    let end = play::run(&mut game, stdin.lock(), &mut io::stdout().lock())?;
    log::debug!("Session ended: {end:?}, seed {seed}");

    Ok(ExitCode::SUCCESS)
}
