use anyhow::Result;

use pixelgrid_common::font::{GLYPH_HEIGHT, GLYPH_WIDTH};
use pixelgrid_common::{Color, Context, Grid, GridApp, Key, Layout};

pub const FPS: u32 = 60;

pub const ROWS: usize = 5;
pub const COLS: usize = 7;
pub const CELL_DIM: i32 = 11;
pub const PADDING: i32 = 10;
/// Counters wrap around at this value.
pub const MODULUS: u8 = 10;

/// A grid of single digit counters: left click counts up, right click
/// counts down, R resets everything to zero.
pub struct CountersApp {
    layout: Layout,
    grid: Grid<u8>,
}

impl Default for CountersApp {
    fn default() -> Self {
        CountersApp {
            layout: Layout::builder()
                .rows(ROWS)
                .cols(COLS)
                .pad_left(PADDING)
                .pad_right(PADDING)
                .pad_top(PADDING)
                .pad_bottom(PADDING)
                .dim(CELL_DIM)
                .build(),
            grid: Grid::new(ROWS, COLS, 0),
        }
    }
}

impl CountersApp {
    pub fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    pub fn reset(&mut self) {
        self.grid.fill(0);
    }

    /// Add `delta` to the counter at `(row, col)` modulo `MODULUS`.
    /// Positions outside the grid are ignored.
    pub fn bump(&mut self, row: i32, col: i32, delta: i32) {
        if let Ok(value) = self.grid.get_mut(row, col) {
            *value = (*value as i32 + delta).rem_euclid(MODULUS as i32) as u8;
        }
    }
}

impl GridApp for CountersApp {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn title(&self) -> String {
        "Counter Grid".to_string()
    }

    fn init(&mut self, ctx: &mut Context) -> Result<()> {
        ctx.show_pointer(true);
        self.reset();
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) -> Result<()> {
        if ctx.is_pressed(Key::R) {
            self.reset();
        }

        let (row, col) = self.layout.pointer_cell(ctx);
        if ctx.is_pressed(Key::MouseLeft) {
            self.bump(row, col, 1);
        }
        if ctx.is_pressed(Key::MouseRight) {
            self.bump(row, col, -1);
        }
        Ok(())
    }

    fn pre_draw_grid(&self, ctx: &mut Context) -> Result<()> {
        ctx.clear(Color::BLACK);
        Ok(())
    }

    fn draw_cell(&self, ctx: &mut Context, row: i32, col: i32, x: i32, y: i32) -> Result<()> {
        let dim = self.layout.dim();
        if self.layout.pointer_cell(ctx) == (row, col) {
            ctx.stroke_rect(x, y, dim, dim, Color::PINK);
        }

        let value = *self.grid.get(row, col)?;
        ctx.text(
            x + (dim - GLYPH_WIDTH) / 2,
            y + (dim - GLYPH_HEIGHT) / 2,
            value.to_string(),
            Color::palette(value as usize + 1),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pixelgrid_common::{DrawCommand, Runner};

    use super::*;

    fn click(runner: &mut Runner<CountersApp>, row: i32, col: i32, key: Key) {
        let (x, y) = runner.app().layout().cell_to_pixel(row, col);
        let ctx = runner.context_mut();
        ctx.set_pointer(x + 2, y + 2);
        ctx.input_mut().press(key);
        ctx.input_mut().release(key);
        runner.tick().unwrap();
    }

    #[test]
    fn clicks_count_up_and_down_modulo_ten() {
        let mut runner = Runner::new(CountersApp::default());
        runner.tick().unwrap();

        for _ in 0..12 {
            click(&mut runner, 1, 2, Key::MouseLeft);
        }
        assert_eq!(runner.app().grid().get(1, 2), Ok(&2));

        for _ in 0..3 {
            click(&mut runner, 0, 0, Key::MouseRight);
        }
        assert_eq!(runner.app().grid().get(0, 0), Ok(&7));
    }

    #[test]
    fn clicks_outside_the_grid_do_nothing() {
        let mut runner = Runner::new(CountersApp::default());
        runner.context_mut().set_pointer(1, 1);
        runner.context_mut().input_mut().press(Key::MouseLeft);
        runner.tick().unwrap();
        assert!(runner.app().grid().values().all(|v| *v == 0));
    }

    #[test]
    fn r_resets() {
        let mut runner = Runner::new(CountersApp::default());
        click(&mut runner, 4, 6, Key::MouseLeft);
        assert_eq!(runner.app().grid().get(4, 6), Ok(&1));
        runner.context_mut().input_mut().press(Key::R);
        runner.tick().unwrap();
        assert!(runner.app().grid().values().all(|v| *v == 0));
    }

    #[test]
    fn pointer_cell_is_outlined() {
        let mut runner = Runner::new(CountersApp::default());
        let (x, y) = runner.app().layout().cell_to_pixel(2, 3);
        runner.context_mut().set_pointer(x, y);
        let commands = runner.tick().unwrap();
        let outlines: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
            .collect();
        assert_eq!(
            outlines,
            vec![&DrawCommand::StrokeRect {
                x,
                y,
                w: CELL_DIM,
                h: CELL_DIM,
                color: Color::PINK
            }]
        );
        let digits = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count();
        assert_eq!(digits, ROWS * COLS);
    }
}
