//! # grid_search
//!
//! Shortest-path search on a square, 4-connected, uniform-cost grid. Runs either
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic,
//! through one best-first engine. Besides the path, every search records the order in
//! which cells were finalized, so a front end can replay the exploration.
//!
//! Ties in the frontier are broken by insertion order and neighbours are always
//! enumerated down, up, right, left, which makes every result reproducible.
//!
//! Coordinates are [Point]s with `x` as the column and `y` as the row; [point] builds
//! one from a `(row, col)` pair.
pub mod error;
pub mod frontier;
pub mod grid;
#[cfg(feature = "serde")]
pub mod report;
pub mod search;
pub mod solver;

pub use error::SearchError;
pub use grid::{point, Cell, Grid, Role};
pub use grid_util::point::Point;
pub use search::{search, Search, SearchResult};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, Mode};

/// Path cost type. Every move costs [UNIT_COST].
pub type Cost = u32;

/// Cost of a cell that has not been reached yet.
pub const INFINITY: Cost = Cost::MAX;
/// Cost of a single cardinal move.
pub const UNIT_COST: Cost = 1;
/// Side length of a [Grid] created through [Default].
pub const DEFAULT_SIZE: usize = 40;

/// Inline capacity of neighbour lists; a cell has at most four.
pub const N_SMALLVEC_SIZE: usize = 4;
