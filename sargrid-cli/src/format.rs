//! Human-readable rendering of routes.
//!
//! Cells print as `(<column letter>,<row>)` with columns lettered from A
//! and rows numbered 1-based from the **top** of the chart, the convention
//! rescue charts use. Grids wider than the alphabet are not expected here.

use sargrid_core::{Point, SeaGrid};
use sargrid_search::path_value;

/// Render a route as `total: (A,1) -> (B,1) -> ...`.
pub fn format_path(grid: &SeaGrid, path: &[Point]) -> String {
    let total = path_value(grid, path);
    let cells: Vec<String> = path.iter().map(|&p| format_cell(grid, p)).collect();
    format!("{}: {}", total, cells.join(" -> "))
}

/// Render one cell as `(<letter>,<row from top>)`.
pub fn format_cell(grid: &SeaGrid, p: Point) -> String {
    let column = char::from(b'A' + p.x as u8);
    let row = grid.side() as i32 - p.y;
    format!("({column},{row})")
}
