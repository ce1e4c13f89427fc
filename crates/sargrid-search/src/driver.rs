//! The search driver — fans the explorer out over every starting cell.

use log::{debug, trace};
use sargrid_core::{Point, SeaGrid};

use crate::explore::Explorer;
use crate::path::{max_path, path_value};

/// Start cells in the fixed enumeration order: x outer, y inner.
fn starts(side: usize) -> impl Iterator<Item = Point> {
    let side = side as i32;
    (0..side).flat_map(move |x| (0..side).map(move |y| Point::new(x, y)))
}

/// Moves handed to the explorer for a requested route length.
///
/// A requested length L ≥ 2 yields an L-cell route. L == 1 is clamped to a
/// single terminal move and yields a 2-cell route — the shortest route the
/// explorer can produce.
#[inline]
fn moves_for(path_length: usize) -> usize {
    (path_length - 1).max(1)
}

/// The best route (or `None` for a dead end) from every starting cell, in
/// start order.
///
/// # Panics
///
/// Panics if `path_length` is zero.
pub fn best_paths_per_start(
    grid: &SeaGrid,
    path_length: usize,
) -> Vec<(Point, Option<Vec<Point>>)> {
    assert!(path_length >= 1, "path_length must be at least 1");
    let moves = moves_for(path_length);
    let side = grid.side();

    // A self-avoiding route cannot visit more cells than the grid holds,
    // so don't recurse to exhaustion proving that.
    if moves + 1 > side * side {
        trace!("route of {} cells cannot fit a {side}x{side} grid", moves + 1);
        return starts(side).map(|start| (start, None)).collect();
    }

    collect_candidates(grid, side, moves)
}

#[cfg(not(feature = "rayon"))]
fn collect_candidates(
    grid: &SeaGrid,
    side: usize,
    moves: usize,
) -> Vec<(Point, Option<Vec<Point>>)> {
    let explorer = Explorer::new(grid);
    starts(side)
        .map(|start| (start, explorer.best_continuation(&[start], moves)))
        .collect()
}

#[cfg(feature = "rayon")]
fn collect_candidates(
    grid: &SeaGrid,
    side: usize,
    moves: usize,
) -> Vec<(Point, Option<Vec<Point>>)> {
    use rayon::prelude::*;
    let explorer = Explorer::new(grid);
    let all: Vec<Point> = starts(side).collect();
    // Collecting back into start order keeps the final tie-break
    // deterministic regardless of completion order.
    all.par_iter()
        .map(|&start| (start, explorer.best_continuation(&[start], moves)))
        .collect()
}

/// The best route of `path_length` cells over the whole grid, or `None`
/// when every starting cell dead-ends.
///
/// Dead-end starts contribute no candidate; surviving candidates are
/// compared in start order under the `>=` rule.
///
/// # Panics
///
/// Panics if `path_length` is zero.
pub fn best_path(grid: &SeaGrid, path_length: usize) -> Option<Vec<Point>> {
    let candidates = best_paths_per_start(grid, path_length);
    let best = max_path(grid, candidates.into_iter().filter_map(|(_, c)| c))?;
    debug!("best route scores {}", path_value(grid, &best));
    Some(best)
}
