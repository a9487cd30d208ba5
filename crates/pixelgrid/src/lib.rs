use anyhow::Result;
use pixelgrid_common::GridApp;
use pixelgrid_sdl2::{SdlContext, SdlInitInfo};

/// Frame rate used by games that do not ask for their own.
pub const DEFAULT_FPS: u32 = 30;

pub enum GameType {
    Maze {
        rows: usize,
        cols: usize,
        seed: Option<u64>,
    },
    Counters,
    Fruit {
        seed: Option<u64>,
    },
    LightsOut {
        size: usize,
        seed: Option<u64>,
    },
}

pub fn run(game: GameType) -> Result<()> {
    match game {
        GameType::Maze { rows, cols, seed } => {
            let app = pixelgrid_maze::MazeApp::new(rows, cols, seed)?;
            run_app(app, DEFAULT_FPS)
        }
        GameType::Counters => run_app(
            pixelgrid_games::CountersApp::default(),
            pixelgrid_games::counters::FPS,
        ),
        GameType::Fruit { seed } => {
            run_app(pixelgrid_games::FruitApp::new(seed), pixelgrid_games::fruit::FPS)
        }
        GameType::LightsOut { size, seed } => {
            let app = pixelgrid_games::LightsOutApp::new(size, seed)?;
            run_app(app, DEFAULT_FPS)
        }
    }
}

fn run_app(app: impl GridApp, fps: u32) -> Result<()> {
    let init_info = SdlInitInfo::builder().title(app.title()).fps(fps).build();
    SdlContext::run(init_info, app)
}
