//! The [`SeaGrid`] type — a square grid of detection scores.
//!
//! Rows are stored top-first, in the order they appear in the input, while
//! coordinates address the grid bottom-up. [`SeaGrid::value_at`] performs
//! the translation (`side - y - 1`) on every read.

use thiserror::Error;

use crate::geom::Point;

/// Error raised when constructing a [`SeaGrid`] from row data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows.
    #[error("grid has no rows")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("row {row} has {got} values, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// The grid is rectangular but not square; adjacency bounds use the
    /// side length on both axes, so non-square grids are refused outright.
    #[error("grid is {rows}x{cols}, expected a square grid")]
    NotSquare { rows: usize, cols: usize },
    /// A negative score. Route selection starts its running maximum at
    /// zero, which an all-negative candidate set can never displace.
    #[error("negative value {value} at row {row}, column {col}")]
    Negative { row: usize, col: usize, value: i32 },
}

// ---------------------------------------------------------------------------
// SeaGrid
// ---------------------------------------------------------------------------

/// An immutable square grid of non-negative detection scores.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeaGrid {
    cells: Vec<i32>,
    side: usize,
}

impl SeaGrid {
    /// Build a grid from rows given top-first.
    ///
    /// Rejects empty input, ragged rows, non-square shapes and negative
    /// values; the search layer relies on all four invariants.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let side = rows.len();
        if side == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows[0].len();
        for (row, r) in rows.iter().enumerate() {
            if r.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    got: r.len(),
                });
            }
            if let Some((col, &value)) = r.iter().enumerate().find(|&(_, &v)| v < 0) {
                return Err(GridError::Negative { row, col, value });
            }
        }
        if expected != side {
            return Err(GridError::NotSquare {
                rows: side,
                cols: expected,
            });
        }
        let mut cells = Vec::with_capacity(side * side);
        for r in rows {
            cells.extend(r);
        }
        Ok(Self { cells, side })
    }

    /// Side length of the square grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether `p` lies within the grid on both axes.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let side = self.side as i32;
        p.x >= 0 && p.x < side && p.y >= 0 && p.y < side
    }

    /// Checked read of the score at a Cartesian coordinate.
    #[inline]
    pub fn get(&self, p: Point) -> Option<i32> {
        if !self.contains(p) {
            return None;
        }
        let row = self.side - 1 - p.y as usize;
        Some(self.cells[row * self.side + p.x as usize])
    }

    /// Score at a Cartesian coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds. The search layer only ever asks for
    /// coordinates it has already bounds-checked, so an out-of-range
    /// request is a logic defect and is treated as fatal.
    #[inline]
    pub fn value_at(&self, p: Point) -> i32 {
        match self.get(p) {
            Some(v) => v,
            None => panic!("coordinate {p} outside {0}x{0} grid", self.side),
        }
    }
}
