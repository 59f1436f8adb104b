use grid_util::point::Point;

use crate::{solver::GridSolver, Cost};

#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    /// No guidance: cells are expanded purely by their cost from the start.
    fn heuristic(&self, _: &Point, _: &Point) -> Cost {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{point, Grid};

    /// On an open grid every cell closer to the start than the goal is finalized first.
    #[test]
    fn expands_in_cost_order() {
        let mut grid = Grid::new(5);
        let start = point(2, 2);
        let result = DijkstraSolver
            .search(&mut grid, start, point(0, 0))
            .unwrap();
        let costs: Vec<i32> = result
            .visit_order
            .iter()
            .map(|p| p.manhattan_distance(&start))
            .collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        // All 20 cells at distance 1..=3, plus any distance-4 corners popped before the goal
        assert!((20..=23).contains(&result.visit_order.len()));
        assert_eq!(result.cost(), Some(4));
    }
}
