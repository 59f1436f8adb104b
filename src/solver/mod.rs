use crate::error::SearchError;
use crate::grid::Grid;
use crate::search::{Search, SearchResult};
use crate::Cost;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;

pub mod astar;
pub mod dijkstra;

use astar::AstarSolver;
use dijkstra::DijkstraSolver;

/// The strategy half of a best-first search: everything else about the expansion is
/// shared, see [Search].
pub trait GridSolver {
    /// Lower bound on the remaining cost from `p` to `goal`. Must be consistent for
    /// the first path found to be the shortest.
    fn heuristic(&self, p: &Point, goal: &Point) -> Cost;

    /// Runs a complete search from `start` to `goal`.
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult, SearchError>
    where
        Self: Sized,
    {
        Ok(self.steps(grid, start, goal)?.into_result())
    }

    /// Prepares a search that finalizes one cell per call to [Iterator::next].
    fn steps<'a>(
        &'a self,
        grid: &'a mut Grid,
        start: Point,
        goal: Point,
    ) -> Result<Search<'a, Self>, SearchError>
    where
        Self: Sized,
    {
        Search::new(grid, self, start, goal)
    }
}

/// Selects the solver behind [search](crate::search).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Uniform-cost expansion.
    Dijkstra,
    /// Expansion guided by the Manhattan distance to the goal.
    #[default]
    AStar,
}

impl GridSolver for Mode {
    fn heuristic(&self, p: &Point, goal: &Point) -> Cost {
        match self {
            Mode::Dijkstra => DijkstraSolver.heuristic(p, goal),
            Mode::AStar => AstarSolver.heuristic(p, goal),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Dijkstra => write!(f, "dijkstra"),
            Mode::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Mode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Mode, SearchError> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Mode::Dijkstra),
            "astar" | "a*" => Ok(Mode::AStar),
            _ => Err(SearchError::UnknownMode(s.to_owned())),
        }
    }
}
