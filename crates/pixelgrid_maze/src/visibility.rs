use pixelgrid_common::Grid;

use crate::maze::MazeCell;

/// Mark every in-bounds cell within Euclidean `radius` of `center` as seen.
/// Cells already seen stay seen. Returns how many cells were newly revealed.
pub fn reveal(grid: &mut Grid<MazeCell>, center: (i32, i32), radius: i32) -> usize {
    let (center_row, center_col) = center;
    let mut revealed = 0;
    for d_row in -radius..=radius {
        for d_col in -radius..=radius {
            // Integer form of sqrt(dr² + dc²) <= radius.
            if d_row * d_row + d_col * d_col > radius * radius {
                continue;
            }
            if let Ok(cell) = grid.get_mut(center_row + d_row, center_col + d_col) {
                if !cell.seen {
                    cell.seen = true;
                    revealed += 1;
                }
            }
        }
    }
    revealed
}
