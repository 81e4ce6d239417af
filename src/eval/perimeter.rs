//! Colour coverage along the board's outer edge.

use crate::board::{Colour, Grid};

/// Counts perimeter cells of `colour`, edge by edge.
///
/// The top and bottom rows are scanned, then the left and right columns, so
/// a matching corner cell counts once for each edge it lies on. On a 1x1
/// grid the single cell lies on all four edges.
pub fn perimeter_count(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.side();
    if side == 0 {
        return 0;
    }
    let last = side - 1;
    let mut count = 0;
    for x in 0..side {
        count += u32::from(grid[x][0] == colour);
        count += u32::from(grid[x][last] == colour);
    }
    for y in 0..side {
        count += u32::from(grid[0][y] == colour);
        count += u32::from(grid[last][y] == colour);
    }
    count
}
