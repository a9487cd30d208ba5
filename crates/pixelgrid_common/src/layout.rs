use typed_builder::TypedBuilder;

use crate::context::Context;
use crate::error::{GridError, GridResult};

/// Fixed pixel geometry of a grid: per-side padding around square cells.
///
/// ```text
///            pad_top
///          +---------+
/// pad_left | R x C   | pad_right
///          | cells   |
///          +---------+
///           pad_bottom
/// ```
#[derive(TypedBuilder, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    #[builder(default)]
    pad_left: i32,
    #[builder(default)]
    pad_right: i32,
    #[builder(default)]
    pad_top: i32,
    #[builder(default)]
    pad_bottom: i32,
    dim: i32,
}

impl Layout {
    pub fn validate(&self) -> GridResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidLayout(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.dim <= 0 {
            return Err(GridError::InvalidLayout(format!(
                "cell dimension must be positive, got {}",
                self.dim
            )));
        }
        if self.pad_left < 0 || self.pad_right < 0 || self.pad_top < 0 || self.pad_bottom < 0 {
            return Err(GridError::InvalidLayout(
                "padding must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn dim(&self) -> i32 {
        self.dim
    }

    #[inline]
    pub fn pad_left(&self) -> i32 {
        self.pad_left
    }

    #[inline]
    pub fn pad_top(&self) -> i32 {
        self.pad_top
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Left pixel edge of column `col`.
    #[inline]
    pub fn x(&self, col: i32) -> i32 {
        self.pad_left + col * self.dim
    }

    /// Top pixel edge of row `row`.
    #[inline]
    pub fn y(&self, row: i32) -> i32 {
        self.pad_top + row * self.dim
    }

    /// Top-left pixel of a cell's rectangle.
    #[inline]
    pub fn cell_to_pixel(&self, row: i32, col: i32) -> (i32, i32) {
        (self.x(col), self.y(row))
    }

    /// Floored inverse of `cell_to_pixel`. The result is not clamped and may
    /// lie outside the grid.
    #[inline]
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        (
            (y - self.pad_top).div_euclid(self.dim),
            (x - self.pad_left).div_euclid(self.dim),
        )
    }

    /// The cell under the host pointer, unclamped.
    pub fn pointer_cell(&self, ctx: &Context) -> (i32, i32) {
        let (x, y) = ctx.pointer();
        self.pixel_to_cell(x, y)
    }

    pub fn width(&self) -> i32 {
        self.pad_left + self.cols as i32 * self.dim + self.pad_right
    }

    pub fn height(&self) -> i32 {
        self.pad_top + self.rows as i32 * self.dim + self.pad_bottom
    }

    pub fn canvas_size(&self) -> (i32, i32) {
        (self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded() -> Layout {
        Layout::builder()
            .rows(4)
            .cols(6)
            .pad_left(18)
            .pad_right(18)
            .pad_top(26)
            .pad_bottom(46)
            .dim(16)
            .build()
    }

    #[test]
    fn canvas_size_includes_padding() {
        assert_eq!(padded().canvas_size(), (18 + 6 * 16 + 18, 26 + 4 * 16 + 46));
    }

    #[test]
    fn padding_defaults_to_zero() {
        let layout = Layout::builder().rows(8).cols(8).dim(40).build();
        assert_eq!(layout.canvas_size(), (320, 320));
        assert_eq!(layout.cell_to_pixel(2, 3), (120, 80));
    }

    #[test]
    fn every_pixel_in_a_cell_maps_back_to_it() {
        let layout = padded();
        for row in 0..4 {
            for col in 0..6 {
                let (x0, y0) = layout.cell_to_pixel(row, col);
                assert!(x0 >= 0 && x0 + layout.dim() <= layout.width());
                assert!(y0 >= 0 && y0 + layout.dim() <= layout.height());
                for dy in 0..layout.dim() {
                    for dx in 0..layout.dim() {
                        assert_eq!(layout.pixel_to_cell(x0 + dx, y0 + dy), (row, col));
                    }
                }
            }
        }
    }

    #[test]
    fn pixels_in_padding_map_outside_the_grid() {
        let layout = padded();
        let (row, col) = layout.pixel_to_cell(0, 0);
        assert_eq!((row, col), (-2, -2));
        assert!(!layout.in_bounds(row, col));

        let (row, col) = layout.pixel_to_cell(layout.width() - 1, layout.height() - 1);
        assert!(!layout.in_bounds(row, col));
    }

    #[test]
    fn pointer_maps_to_second_row_first_column() {
        let layout = Layout::builder()
            .rows(3)
            .cols(3)
            .pad_left(10)
            .pad_top(20)
            .dim(16)
            .build();
        let mut ctx = Context::new();
        ctx.set_pointer(10 + 3, 20 + 16 + 3);
        assert_eq!(layout.pointer_cell(&ctx), (1, 0));
    }

    #[test]
    fn validate_rejects_degenerate_layouts() {
        assert!(padded().validate().is_ok());
        assert!(Layout::builder().rows(0).cols(3).dim(4).build().validate().is_err());
        assert!(Layout::builder().rows(3).cols(3).dim(0).build().validate().is_err());
        assert!(Layout::builder()
            .rows(3)
            .cols(3)
            .pad_left(-1)
            .dim(4)
            .build()
            .validate()
            .is_err());
    }
}
