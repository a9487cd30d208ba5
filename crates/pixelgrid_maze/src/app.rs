use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pixelgrid_common::{Color, Context, GridApp, GridResult, Key, Layout};

use crate::fog;
use crate::maze::{CellKind, Maze};
use crate::{CELL_DIM, HEADER_HEIGHT, VISION_RADIUS};

/// Frames an arrow key must be held before it starts repeating.
const HOLD_FRAMES: u32 = 8;
/// Frames between repeated steps while an arrow key stays held.
const REPEAT_FRAMES: u32 = 2;
const EXIT_BAR_WIDTH: i32 = 3;

const MOVES: [(Key, i32, i32); 4] = [
    (Key::Up, -1, 0),
    (Key::Down, 1, 0),
    (Key::Left, 0, -1),
    (Key::Right, 0, 1),
];

pub struct MazeApp {
    layout: Layout,
    rng: StdRng,
    maze: Maze,
    solid: bool,
}

impl MazeApp {
    /// A maze app with a first maze already generated. `seed` makes the
    /// sequence of mazes reproducible.
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> GridResult<Self> {
        let layout = Layout::builder()
            .rows(rows)
            .cols(cols)
            .pad_top(HEADER_HEIGHT)
            .dim(CELL_DIM)
            .build();
        layout.validate()?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let maze = Maze::generate(rows, cols, VISION_RADIUS, &mut rng)?;
        Ok(MazeApp {
            layout,
            rng,
            maze,
            solid: false,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn new_game(&mut self) -> GridResult<()> {
        self.maze = Maze::generate(
            self.layout.rows(),
            self.layout.cols(),
            VISION_RADIUS,
            &mut self.rng,
        )?;
        Ok(())
    }
}

impl GridApp for MazeApp {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn title(&self) -> String {
        "Maze".to_string()
    }

    fn init(&mut self, ctx: &mut Context) -> Result<()> {
        ctx.show_pointer(false);
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) -> Result<()> {
        if ctx.is_pressed(Key::N) {
            self.new_game()?;
        }

        if ctx.is_pressed(Key::S) {
            self.solid = !self.solid;
        }

        if !self.maze.is_won() {
            for (key, d_row, d_col) in MOVES {
                if ctx.is_pressed_repeat(key, HOLD_FRAMES, REPEAT_FRAMES) {
                    self.maze.try_move(d_row, d_col)?;
                }
            }
        }
        Ok(())
    }

    fn pre_draw_grid(&self, ctx: &mut Context) -> Result<()> {
        ctx.clear(Color::BLACK);
        Ok(())
    }

    fn draw_cell(&self, ctx: &mut Context, row: i32, col: i32, x: i32, y: i32) -> Result<()> {
        let dim = self.layout.dim();
        let cell = self.maze.cell(row, col)?;

        match (cell.seen, cell.kind) {
            (true, CellKind::Path) => ctx.fill_rect(x, y, dim, dim, Color::GREEN),
            (true, CellKind::Obstacle) if self.solid => ctx.fill_rect(x, y, dim, dim, Color::BROWN),
            (true, CellKind::Exit) => {
                ctx.fill_rect(x, y, dim, dim, Color::GREEN);
                let offset = (dim - EXIT_BAR_WIDTH) / 2;
                ctx.fill_rect(x + offset, y, EXIT_BAR_WIDTH, dim, Color::LIME);
                ctx.fill_rect(x, y + offset, dim, EXIT_BAR_WIDTH, Color::LIME);
            }
            _ => fog::draw_clouds(ctx, x, y, dim),
        }

        if (row, col) == self.maze.player() {
            ctx.fill_circle(x + dim / 2, y + dim / 2, dim / 4, Color::DARK_BLUE);
        }
        Ok(())
    }

    fn post_draw_grid(&self, ctx: &mut Context) -> Result<()> {
        if self.maze.is_won() {
            ctx.text(2, 2, "WIN!!!", Color::LIME);
        }
        ctx.text(2, 11, "CONTROLS: N, S, ARROW KEYS", Color::GREEN);
        Ok(())
    }

    fn exit(&mut self) {
        log::info!("Maze exit");
    }
}
