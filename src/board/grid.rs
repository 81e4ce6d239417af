//! Flat rasterized view of a board.
//!
//! Cells are stored column-major: `grid[x][y]` is column `x`, row `y`, and
//! `grid[0][0]` is the upper-left unit cell.

use std::ops::Index;

use super::colour::Colour;
use super::error::BoardError;

/// A square grid of unit-cell colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Colour>,
}

impl Grid {
    /// Builds a grid by evaluating `f(x, y)` for every cell, column by column.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> Colour) -> Self {
        let mut cells = Vec::with_capacity(side * side);
        for x in 0..side {
            for y in 0..side {
                cells.push(f(x, y));
            }
        }
        Grid { side, cells }
    }

    /// Builds a grid from a list of columns. Every column must be as long as
    /// the number of columns.
    pub fn from_columns(columns: Vec<Vec<Colour>>) -> Result<Self, BoardError> {
        let side = columns.len();
        let mut cells = Vec::with_capacity(side * side);
        for column in columns {
            if column.len() != side {
                return Err(BoardError::RaggedGrid {
                    expected: side,
                    found: column.len(),
                });
            }
            cells.extend(column);
        }
        Ok(Grid { side, cells })
    }

    /// Number of cells along each edge.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        if x < self.side && y < self.side {
            Some(self.cells[x * self.side + y])
        } else {
            None
        }
    }

    /// Iterates `(x, y, colour)` in storage order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Colour)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i / side, i % side, *c))
    }
}

impl Index<usize> for Grid {
    type Output = [Colour];

    fn index(&self, x: usize) -> &[Colour] {
        &self.cells[x * self.side..(x + 1) * self.side]
    }
}
