//! Largest connected blob of a colour.
//!
//! Cells connect through their four edge neighbours only; diagonal contact
//! does not join two blobs.

use crate::board::{Colour, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Matching,
    NotMatching,
}

/// Returns the size of the largest 4-connected region of `colour` cells.
///
/// Every cell is scanned column by column; each unvisited cell seeds a
/// flood fill that claims its whole region. Returns 0 when no cell matches.
pub fn largest_blob(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.side();
    let mut visited = vec![Visit::Unvisited; side * side];
    let mut stack = Vec::new();
    let mut best = 0;

    for x in 0..side {
        for y in 0..side {
            if visited[x * side + y] == Visit::Unvisited {
                let size = undiscovered_blob_size(grid, colour, (x, y), &mut visited, &mut stack);
                best = best.max(size);
            }
        }
    }
    best
}

/// Flood-fills from `seed`, marking every cell it reaches, and returns the
/// number of matching cells claimed.
///
/// The seed counts 0 if it does not match. Visited cells are never counted
/// twice, and neighbours off the grid are skipped without being marked.
fn undiscovered_blob_size(
    grid: &Grid,
    colour: Colour,
    seed: (usize, usize),
    visited: &mut [Visit],
    stack: &mut Vec<(usize, usize)>,
) -> u32 {
    let side = grid.side();
    if !claim(grid, colour, seed, visited) {
        return 0;
    }

    let mut size = 1;
    stack.clear();
    stack.push(seed);
    while let Some((x, y)) = stack.pop() {
        let neighbours = [
            (Some(x), y.checked_add(1)),
            (Some(x), y.checked_sub(1)),
            (x.checked_add(1), Some(y)),
            (x.checked_sub(1), Some(y)),
        ];
        for (nx, ny) in neighbours {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if nx >= side || ny >= side || visited[nx * side + ny] != Visit::Unvisited {
                continue;
            }
            if claim(grid, colour, (nx, ny), visited) {
                size += 1;
                stack.push((nx, ny));
            }
        }
    }
    size
}

/// Marks an unvisited cell and reports whether it matches `colour`.
fn claim(grid: &Grid, colour: Colour, (x, y): (usize, usize), visited: &mut [Visit]) -> bool {
    let matches = grid[x][y] == colour;
    visited[x * grid.side() + y] = if matches {
        Visit::Matching
    } else {
        Visit::NotMatching
    };
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::colour::{OLD_OLIVE, PACIFIC_POINT, REAL_RED};

    const R: Colour = REAL_RED;
    const B: Colour = PACIFIC_POINT;

    fn grid(rows: &[&[Colour]]) -> Grid {
        // Written row by row for readability; stored column-major.
        Grid::from_fn(rows.len(), |x, y| rows[y][x])
    }

    #[test]
    fn uniform_grid_is_one_blob() {
        let g = Grid::from_fn(4, |_, _| R);
        assert_eq!(largest_blob(&g, R), 16);
    }

    #[test]
    fn absent_colour_scores_zero() {
        let g = Grid::from_fn(4, |_, _| R);
        assert_eq!(largest_blob(&g, B), 0);
    }

    #[test]
    fn diagonal_cells_do_not_connect() {
        let g = grid(&[
            &[R, B, B, B],
            &[B, R, B, B],
            &[B, B, B, B],
            &[B, B, B, B],
        ]);
        assert_eq!(largest_blob(&g, R), 1);
        assert_eq!(largest_blob(&g, B), 14);
    }

    #[test]
    fn picks_largest_of_several_blobs() {
        let g = grid(&[
            &[R, R, B, R],
            &[B, B, B, R],
            &[R, B, R, R],
            &[R, B, R, B],
        ]);
        // Right-hand blob: (3,0), (3,1), (3,2), (2,2), (2,3).
        assert_eq!(largest_blob(&g, R), 5);
        assert_eq!(largest_blob(&g, B), 6);
    }

    #[test]
    fn winding_blob_is_counted_once() {
        let g = grid(&[
            &[R, R, R, R],
            &[B, B, B, R],
            &[R, R, B, R],
            &[R, R, R, R],
        ]);
        assert_eq!(largest_blob(&g, R), 12);
        assert_eq!(largest_blob(&g, OLD_OLIVE), 0);
    }

    #[test]
    fn single_cell_grid() {
        let g = Grid::from_fn(1, |_, _| R);
        assert_eq!(largest_blob(&g, R), 1);
    }

    #[test]
    fn empty_grid_scores_zero() {
        let g = Grid::from_columns(Vec::new()).unwrap();
        assert_eq!(largest_blob(&g, R), 0);
    }
}
