use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pixelgrid_common::{Color, Context, Grid, GridApp, GridError, GridResult, Key, Layout};

pub const DEFAULT_SIZE: usize = 8;
pub const CELL_DIM: i32 = 40;

const NEIGHBOURHOOD: [(i32, i32); 5] = [(0, 0), (0, 1), (0, -1), (1, 0), (-1, 0)];

/// Lights Out on an `n` by `n` board. A move toggles a light and its four
/// neighbours; the puzzle is won once every light is off.
pub struct LightsOutApp {
    layout: Layout,
    grid: Grid<bool>,
    rng: StdRng,
    won: bool,
}

impl LightsOutApp {
    pub fn new(size: usize, seed: Option<u64>) -> GridResult<Self> {
        let layout = Layout::builder().rows(size).cols(size).dim(CELL_DIM).build();
        layout.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(LightsOutApp {
            layout,
            grid: Grid::new(size, size, false),
            rng,
            won: false,
        })
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Start from a dark board and apply random moves, so the result is
    /// always solvable.
    pub fn new_game(&mut self) -> GridResult<()> {
        self.won = false;
        self.grid.fill(false);
        for row in 0..self.layout.rows() as i32 {
            for col in 0..self.layout.cols() as i32 {
                if self.rng.gen_bool(0.5) {
                    self.apply_move(row, col)?;
                }
            }
        }
        log::info!("Lights Out new game, {} lights on", self.lit());
        Ok(())
    }

    pub fn lit(&self) -> usize {
        self.grid.values().filter(|on| **on).count()
    }

    pub fn apply_move(&mut self, row: i32, col: i32) -> GridResult<()> {
        if !self.grid.in_bounds(row, col) {
            return Err(GridError::InvalidOperation(format!(
                "cannot move at ({}, {}) outside the board",
                row, col
            )));
        }
        for (d_row, d_col) in NEIGHBOURHOOD {
            let (r, c) = (row + d_row, col + d_col);
            if self.grid.in_bounds(r, c) {
                self.flip(r, c)?;
            }
        }
        Ok(())
    }

    pub fn flip(&mut self, row: i32, col: i32) -> GridResult<()> {
        let light = self.grid.get_mut(row, col).map_err(|_| {
            GridError::InvalidOperation(format!("cannot flip ({}, {}) outside the board", row, col))
        })?;
        *light = !*light;
        Ok(())
    }

    fn check_win(&mut self) {
        if !self.won && self.lit() == 0 {
            self.won = true;
            log::info!("Lights Out solved");
        }
    }
}

impl GridApp for LightsOutApp {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn title(&self) -> String {
        "Lights Out".to_string()
    }

    fn init(&mut self, ctx: &mut Context) -> Result<()> {
        ctx.show_pointer(true);
        self.new_game()?;
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) -> Result<()> {
        if ctx.is_pressed(Key::N) {
            self.new_game()?;
        }

        if !self.won && ctx.is_pressed(Key::MouseLeft) {
            let (row, col) = self.layout.pointer_cell(ctx);
            if self.layout.in_bounds(row, col) {
                self.apply_move(row, col)?;
            }
        }

        self.check_win();
        Ok(())
    }

    fn pre_draw_grid(&self, ctx: &mut Context) -> Result<()> {
        ctx.clear(Color::BLACK);
        Ok(())
    }

    fn draw_cell(&self, ctx: &mut Context, row: i32, col: i32, x: i32, y: i32) -> Result<()> {
        let inner = self.layout.dim() - 2;
        if *self.grid.get(row, col)? {
            ctx.fill_rect(x + 1, y + 1, inner, inner, Color::LIGHT_BLUE);
        } else {
            ctx.stroke_rect(x + 1, y + 1, inner, inner, Color::NAVY);
        }
        Ok(())
    }

    fn post_draw_grid(&self, ctx: &mut Context) -> Result<()> {
        if self.won {
            let theta = ctx.frame_count() as f64 / 14.0;
            let (width, height) = self.layout.canvas_size();
            let x = width as f64 / 2.0 * (1.0 + 0.4 * theta.cos()) - 18.0;
            let y = height as f64 / 2.0 * (1.0 + 0.4 * theta.sin());
            ctx.text(x as i32, y as i32, "YOU WIN!!", Color::LIME);
        }
        Ok(())
    }
}
