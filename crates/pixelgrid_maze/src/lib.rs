pub mod app;
pub mod disjoint_set;
pub mod fog;
pub mod maze;
pub mod visibility;

pub use app::MazeApp;
pub use disjoint_set::DisjointSet;
pub use maze::{CellKind, Maze, MazeCell};

/// Default maze height in cells.
pub const DEFAULT_ROWS: usize = 21;
/// Default maze width in cells.
pub const DEFAULT_COLS: usize = 31;
/// Cell side in pixels.
pub const CELL_DIM: i32 = 9;
/// Space above the maze for the status line.
pub const HEADER_HEIGHT: i32 = 20;
/// Radius, in cells, revealed around the player.
pub const VISION_RADIUS: i32 = 7;
