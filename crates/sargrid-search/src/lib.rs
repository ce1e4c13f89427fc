//! Exhaustive best-route search over scored sea grids.
//!
//! Given a [`SeaGrid`](sargrid_core::SeaGrid) of detection scores, this
//! crate finds the self-avoiding route of a fixed length whose visited
//! cells sum to the highest value:
//!
//! - [`admissible`] — in-bounds, not-yet-visited cardinal moves
//! - [`Explorer::best_continuation`] — recursive completion of a partial
//!   route, with a greedy final hop
//! - [`best_path`] / [`best_paths_per_start`] — the driver that fans the
//!   explorer out over every starting cell
//!
//! # Selection semantics
//!
//! All maximum selection uses a running threshold that starts at zero and
//! is displaced on `value >= threshold`. Two consequences are deliberate
//! and observable: among equal-valued candidates the **last** one in
//! enumeration order wins, and a route over all-zero cells is still
//! accepted. The enumeration order is fixed everywhere — neighbors go up,
//! down, left, right; starts go x-outer, y-inner.
//!
//! The search is exhaustive and unmemoized: branching ≤ 4 and depth equal
//! to the requested length make it exponential in the worst case, which is
//! acceptable for the small grids this models.

mod driver;
mod explore;
mod neighbors;
mod path;

pub use driver::{best_path, best_paths_per_start};
pub use explore::Explorer;
pub use neighbors::admissible;
pub use path::{max_cell, max_path, path_value};
