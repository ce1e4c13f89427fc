//! Recursive route exploration from a fixed starting path.

use sargrid_core::{Point, SeaGrid};

use crate::neighbors::admissible;
use crate::path::{max_cell, max_path};

/// Recursive explorer for the best continuation of a partial route.
///
/// Borrows the grid for the duration of one search; routes are built with
/// value semantics (the partial route is cloned on every append), so the
/// explorer itself carries no mutable state.
pub struct Explorer<'g> {
    grid: &'g SeaGrid,
}

impl<'g> Explorer<'g> {
    /// Create an explorer over `grid`.
    pub fn new(grid: &'g SeaGrid) -> Self {
        Self { grid }
    }

    /// The highest-value completion of `path_so_far` in `remaining`
    /// further moves, or `None` if the route dead-ends.
    ///
    /// `path_so_far` must be non-empty; its last element is the current
    /// cell. `remaining` must be at least 1. The returned route replaces
    /// the current cell at its head and always holds `remaining + 1`
    /// cells with no coordinate repeated.
    ///
    /// The final move is resolved greedily: at `remaining == 1` the single
    /// highest-valued admissible neighbour is taken without looking ahead,
    /// so the result is locally greedy at that hop rather than globally
    /// optimal. Dead ends are a normal outcome, not an error; every `None`
    /// from a sub-route is discarded before selection.
    pub fn best_continuation(&self, path_so_far: &[Point], remaining: usize) -> Option<Vec<Point>> {
        debug_assert!(remaining >= 1, "explorer called with no moves left");
        let &current = path_so_far.last()?;
        let next_cells = admissible(current, path_so_far, self.grid.side() as i32);

        if next_cells.is_empty() {
            return None;
        }

        // Terminal move: take the best immediate neighbour, no recursion.
        if remaining == 1 {
            let chosen = max_cell(self.grid, &next_cells)?;
            return Some(vec![current, chosen]);
        }

        let mut candidates = Vec::with_capacity(next_cells.len());
        for cell in next_cells {
            let mut extended = path_so_far.to_vec();
            extended.push(cell);
            if let Some(continuation) = self.best_continuation(&extended, remaining - 1) {
                candidates.push(continuation);
            }
        }

        let best = max_path(self.grid, candidates)?;
        let mut route = Vec::with_capacity(best.len() + 1);
        route.push(current);
        route.extend(best);
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngExt};
    use std::collections::HashSet;

    fn example() -> SeaGrid {
        SeaGrid::from_rows(vec![vec![1, 2, 4], vec![3, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn terminal_move_takes_richest_neighbor() {
        let g = example();
        let explorer = Explorer::new(&g);
        // From (1, 1): up (1,2)=2, down (1,0)=8, left (0,1)=3, right (2,1)=6.
        let route = explorer
            .best_continuation(&[Point::new(1, 1)], 1)
            .unwrap();
        assert_eq!(route, vec![Point::new(1, 1), Point::new(1, 0)]);
    }

    #[test]
    fn terminal_move_skips_visited_neighbor() {
        let g = example();
        let explorer = Explorer::new(&g);
        let route = explorer
            .best_continuation(&[Point::new(1, 0), Point::new(1, 1)], 1)
            .unwrap();
        // (1, 0) is already visited, so the best remaining neighbour wins.
        assert_eq!(route, vec![Point::new(1, 1), Point::new(2, 1)]);
    }

    #[test]
    fn recursion_finds_bottom_row() {
        let g = example();
        let explorer = Explorer::new(&g);
        let route = explorer
            .best_continuation(&[Point::new(0, 0)], 2)
            .unwrap();
        assert_eq!(
            route,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn route_length_is_remaining_plus_one() {
        let g = example();
        let explorer = Explorer::new(&g);
        for remaining in 1..=6 {
            let route = explorer
                .best_continuation(&[Point::new(0, 0)], remaining)
                .unwrap();
            assert_eq!(route.len(), remaining + 1);
        }
    }

    #[test]
    fn dead_end_is_none() {
        let g = SeaGrid::from_rows(vec![vec![5]]).unwrap();
        let explorer = Explorer::new(&g);
        assert_eq!(explorer.best_continuation(&[Point::new(0, 0)], 1), None);
    }

    #[test]
    fn surrounded_cell_is_none() {
        let g = example();
        let explorer = Explorer::new(&g);
        let boxed_in = [
            Point::new(1, 2),
            Point::new(0, 1),
            Point::new(2, 1),
            Point::new(1, 0),
            Point::new(1, 1),
        ];
        assert_eq!(explorer.best_continuation(&boxed_in, 3), None);
    }

    #[test]
    fn exhausted_branches_are_none() {
        // A 2x2 grid has 4 cells; 4 moves would need 5.
        let g = SeaGrid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let explorer = Explorer::new(&g);
        assert_eq!(explorer.best_continuation(&[Point::new(0, 0)], 4), None);
        assert!(explorer.best_continuation(&[Point::new(0, 0)], 3).is_some());
    }

    #[test]
    fn routes_never_repeat_a_coordinate() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let side = 4;
            let rows = (0..side)
                .map(|_| (0..side).map(|_| rng.random_range(0..100)).collect())
                .collect();
            let g = SeaGrid::from_rows(rows).unwrap();
            let explorer = Explorer::new(&g);
            let start = Point::new(
                rng.random_range(0..side as i32),
                rng.random_range(0..side as i32),
            );
            let route = explorer.best_continuation(&[start], 5).unwrap();
            let unique: HashSet<Point> = route.iter().copied().collect();
            assert_eq!(unique.len(), route.len(), "repeat in {route:?}");
            for &p in &route {
                assert!(g.contains(p), "{p} out of bounds");
            }
        }
    }
}
