use rand::seq::SliceRandom;
use rand::Rng;

use pixelgrid_common::{Grid, GridError, GridResult};

use crate::disjoint_set::DisjointSet;
use crate::visibility;

/// Number of random corner pairs drawn when picking start and exit.
const ENDPOINT_TRIALS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Obstacle,
    Path,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeCell {
    pub kind: CellKind,
    pub seen: bool,
}

impl MazeCell {
    pub const fn new(kind: CellKind) -> Self {
        MazeCell { kind, seen: false }
    }

    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.kind != CellKind::Obstacle
    }
}

/// Two neighbouring corners and the wall cell between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: (i32, i32),
    pub b: (i32, i32),
    pub wall: (i32, i32),
}

/// A generated maze together with the player walking it.
///
/// Corners (even row, even column) are always open. The wall cells carved
/// between them form a spanning tree, so every corner reaches every other
/// one along exactly one simple path.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid<MazeCell>,
    start: (i32, i32),
    exit: (i32, i32),
    player: (i32, i32),
    vision_radius: i32,
    carved: usize,
    won: bool,
}

impl Maze {
    /// Generate a maze with randomly picked, well separated endpoints.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        vision_radius: i32,
        rng: &mut R,
    ) -> GridResult<Maze> {
        let (start, exit) = pick_endpoints(&corners(rows, cols), rng).ok_or_else(|| {
            GridError::InvalidLayout(format!(
                "a {}x{} maze has fewer than two corners",
                rows, cols
            ))
        })?;
        Maze::with_endpoints(rows, cols, start, exit, vision_radius, rng)
    }

    /// Generate a maze between the given corners.
    pub fn with_endpoints<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        start: (i32, i32),
        exit: (i32, i32),
        vision_radius: i32,
        rng: &mut R,
    ) -> GridResult<Maze> {
        let mut grid = Grid::new(rows, cols, MazeCell::new(CellKind::Obstacle));
        for endpoint in [start, exit] {
            if !grid.in_bounds(endpoint.0, endpoint.1) || !is_corner(endpoint) {
                return Err(GridError::InvalidOperation(format!(
                    "maze endpoint {:?} is not a corner of the {}x{} grid",
                    endpoint, rows, cols
                )));
            }
        }
        if start == exit {
            return Err(GridError::InvalidOperation(
                "maze start and exit must differ".to_string(),
            ));
        }

        let corners = corners(rows, cols);
        for &(row, col) in &corners {
            grid.get_mut(row, col)?.kind = CellKind::Path;
        }
        grid.get_mut(exit.0, exit.1)?.kind = CellKind::Exit;

        let mut edges = candidate_edges(rows, cols);
        edges.shuffle(rng);
        let carved = carve(&mut grid, cols, &edges)?;

        let mut maze = Maze {
            grid,
            start,
            exit,
            player: start,
            vision_radius,
            carved,
            won: false,
        };
        maze.visit();

        log::info!(
            "New {}x{} maze: start {:?}, exit {:?}, {} of {} walls carved",
            rows,
            cols,
            start,
            exit,
            carved,
            edges.len()
        );
        Ok(maze)
    }

    pub fn grid(&self) -> &Grid<MazeCell> {
        &self.grid
    }

    pub fn cell(&self, row: i32, col: i32) -> GridResult<&MazeCell> {
        self.grid.get(row, col)
    }

    pub fn start(&self) -> (i32, i32) {
        self.start
    }

    pub fn exit(&self) -> (i32, i32) {
        self.exit
    }

    pub fn player(&self) -> (i32, i32) {
        self.player
    }

    /// Number of wall cells opened during generation.
    pub fn carved(&self) -> usize {
        self.carved
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Step the player one cell along an axis. Walking into a wall or off the
    /// grid is a no-op and returns `Ok(false)`; anything but a single axis
    /// step is an error.
    pub fn try_move(&mut self, d_row: i32, d_col: i32) -> GridResult<bool> {
        if d_row.abs() + d_col.abs() != 1 {
            return Err(GridError::InvalidOperation(format!(
                "move ({}, {}) is not a single axis step",
                d_row, d_col
            )));
        }

        let (row, col) = (self.player.0 + d_row, self.player.1 + d_col);
        match self.grid.get(row, col) {
            Ok(cell) if cell.is_walkable() => {}
            _ => return Ok(false),
        }

        self.player = (row, col);
        self.visit();
        self.check_win();
        log::debug!("Player moved to {:?}", self.player);
        Ok(true)
    }

    fn visit(&mut self) {
        visibility::reveal(&mut self.grid, self.player, self.vision_radius);
    }

    fn check_win(&mut self) {
        if self.won {
            return;
        }
        let (row, col) = self.player;
        if self.grid.get(row, col).map(|c| c.kind) == Ok(CellKind::Exit) {
            self.won = true;
            log::info!("Maze solved at {:?}", self.player);
        }
    }
}

#[inline]
pub fn is_corner((row, col): (i32, i32)) -> bool {
    row % 2 == 0 && col % 2 == 0
}

/// All cells with an even row and an even column, row-major.
pub fn corners(rows: usize, cols: usize) -> Vec<(i32, i32)> {
    (0..rows as i32)
        .step_by(2)
        .flat_map(|row| (0..cols as i32).step_by(2).map(move |col| (row, col)))
        .collect()
}

/// Position of a corner in the row-major list returned by `corners`.
#[inline]
fn corner_index(cols: usize, (row, col): (i32, i32)) -> usize {
    let corner_cols = (cols + 1) / 2;
    (row as usize / 2) * corner_cols + col as usize / 2
}

/// Draw `ENDPOINT_TRIALS` pairs of distinct corners and keep the pair that
/// is furthest apart in Manhattan distance, the earliest one on ties.
/// `None` when there are fewer than two corners.
fn pick_endpoints<R: Rng + ?Sized>(
    corners: &[(i32, i32)],
    rng: &mut R,
) -> Option<((i32, i32), (i32, i32))> {
    if corners.len() < 2 {
        return None;
    }
    let mut best: Option<(i32, (i32, i32), (i32, i32))> = None;
    for _ in 0..ENDPOINT_TRIALS {
        let (a, b) = loop {
            let a = corners[rng.gen_range(0..corners.len())];
            let b = corners[rng.gen_range(0..corners.len())];
            if a != b {
                break (a, b);
            }
        };
        let distance = (a.0 - b.0).abs() + (a.1 - b.1).abs();
        if best.map_or(true, |(d, _, _)| distance > d) {
            best = Some((distance, a, b));
        }
    }
    best.map(|(_, start, exit)| (start, exit))
}

/// Every pair of corners two cells apart along the positive row or column
/// direction, with the wall cell between them.
pub fn candidate_edges(rows: usize, cols: usize) -> Vec<Edge> {
    let (rows, cols) = (rows as i32, cols as i32);
    let mut edges = Vec::new();
    for (row, col) in corners(rows as usize, cols as usize) {
        for (d_row, d_col) in [(1, 0), (0, 1)] {
            let far = (row + 2 * d_row, col + 2 * d_col);
            if far.0 < rows && far.1 < cols {
                edges.push(Edge {
                    a: (row, col),
                    b: far,
                    wall: (row + d_row, col + d_col),
                });
            }
        }
    }
    edges
}

/// Open the wall of each edge, in order, that joins two corners not yet
/// connected. Returns the number of walls opened.
fn carve(grid: &mut Grid<MazeCell>, cols: usize, edges: &[Edge]) -> GridResult<usize> {
    let corner_count = (grid.rows() + 1) / 2 * ((cols + 1) / 2);
    let mut components = DisjointSet::new(corner_count);
    let mut carved = 0;
    for edge in edges {
        let wall = grid.get_mut(edge.wall.0, edge.wall.1)?;
        debug_assert_eq!(wall.kind, CellKind::Obstacle);
        if components.union(corner_index(cols, edge.a), corner_index(cols, edge.b)) {
            wall.kind = CellKind::Path;
            carved += 1;
        }
    }
    Ok(carved)
}

#[cfg(test)]
mod tests;
