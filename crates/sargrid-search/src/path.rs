//! Route scoring and maximum selection.
//!
//! Both selectors share one selection rule: a running maximum
//! that starts at zero and is displaced whenever a candidate scores `>=`
//! the current maximum. Among equal candidates the last one enumerated
//! wins, and a zero-valued candidate displaces the initial empty state.

use sargrid_core::{Point, SeaGrid};

/// Sum of the grid scores over every cell in `path`.
#[inline]
pub fn path_value(grid: &SeaGrid, path: &[Point]) -> i64 {
    path.iter().map(|&p| i64::from(grid.value_at(p))).sum()
}

/// The highest-scoring cell, under the `>=` rule.
///
/// `None` only for an empty slice: scores are non-negative, so any cell
/// displaces the initial zero threshold.
pub fn max_cell(grid: &SeaGrid, cells: &[Point]) -> Option<Point> {
    let mut high_value = 0;
    let mut high_cell = None;
    for &cell in cells {
        let value = grid.value_at(cell);
        if value >= high_value {
            high_value = value;
            high_cell = Some(cell);
        }
    }
    high_cell
}

/// The highest-scoring path among `paths`, under the `>=` rule.
///
/// Callers must filter out dead-end (absent) candidates before selection;
/// an absent candidate is never scored.
pub fn max_path(grid: &SeaGrid, paths: impl IntoIterator<Item = Vec<Point>>) -> Option<Vec<Point>> {
    let mut high_value = 0;
    let mut high_path = None;
    for path in paths {
        let total = path_value(grid, &path);
        if total >= high_value {
            high_value = total;
            high_path = Some(path);
        }
    }
    high_path
}
