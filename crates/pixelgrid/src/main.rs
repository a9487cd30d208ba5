use clap::{Parser, Subcommand};
use pixelgrid::GameType;

/// Small single-screen grid games
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand, Debug)]
enum Game {
    /// Find the exit of a fogged maze
    Maze {
        /// Maze height in cells
        #[arg(long, default_value_t = pixelgrid_maze::DEFAULT_ROWS)]
        rows: usize,

        /// Maze width in cells
        #[arg(long, default_value_t = pixelgrid_maze::DEFAULT_COLS)]
        cols: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// A grid of click counters
    Counters,
    /// Eat fresh fruit before your HP runs out
    Fruit {
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Switch every light off
    LightsOut {
        /// Board side length
        #[arg(short, default_value_t = pixelgrid_games::lights_out::DEFAULT_SIZE)]
        n: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let game = match args.game {
        Game::Maze { rows, cols, seed } => GameType::Maze { rows, cols, seed },
        Game::Counters => GameType::Counters,
        Game::Fruit { seed } => GameType::Fruit { seed },
        Game::LightsOut { n, seed } => GameType::LightsOut { size: n, seed },
    };

    if let Err(err) = pixelgrid::run(game) {
        log::error!("{:#}", err);
        eprintln!("pixelgrid: {:#}", err);
        std::process::exit(1);
    }
}
