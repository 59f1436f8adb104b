use grid_util::point::Point;

use crate::{solver::GridSolver, Cost, UNIT_COST};

#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) times the cost
    /// of a single move. Admissible and consistent on a 4-connected uniform-cost grid.
    fn heuristic(&self, p1: &Point, p2: &Point) -> Cost {
        p1.manhattan_distance(p2) as Cost * UNIT_COST
    }
}
