use crate::error::{GridError, GridResult};

/// Dense row-major storage of one value per cell.
///
/// The dimensions are fixed at construction and every cell always holds a
/// value. Coordinates are signed so that raw geometry (for example the cell
/// under a pointer left of the grid) can be passed straight to `in_bounds`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Build a grid whose cells are produced by `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(i32, i32) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                cells.push(f(row, col));
            }
        }
        Grid { rows, cols, cells }
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
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn index(&self, row: i32, col: i32) -> GridResult<usize> {
        if self.in_bounds(row, col) {
            Ok(row as usize * self.cols + col as usize)
        } else {
            Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: i32, col: i32) -> GridResult<&T> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, row: i32, col: i32) -> GridResult<&mut T> {
        let idx = self.index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, row: i32, col: i32, value: T) -> GridResult<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// All cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i / cols) as i32, (i % cols) as i32), cell))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }
}
