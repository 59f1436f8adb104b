//! Best-first search shared by every [GridSolver].
//!
//! The frontier is keyed by `(priority, sequence)` where the sequence number grows with
//! every push, so equal priorities resolve in insertion order. A cell is pushed again
//! whenever its cost strictly improves; the superseded entries stay in the heap and are
//! skipped when popped. Only the pop that carries a cell's final cost finalizes it.
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::solver::{GridSolver, Mode};
use crate::{Cost, UNIT_COST};
use grid_util::point::Point;
use log::{debug, info, trace, warn};
use std::iter::FusedIterator;

/// Outcome of one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    /// Start to end inclusive, empty if the end was not reached.
    pub path: Vec<Point>,
    /// Cells in the order they were finalized, without the start and end.
    pub visit_order: Vec<Point>,
}

impl SearchResult {
    /// Number of moves along the path.
    pub fn cost(&self) -> Option<Cost> {
        self.found
            .then(|| (self.path.len() as Cost).saturating_sub(1) * UNIT_COST)
    }
}

/// Runs a complete search from `start` to `end`.
///
/// The grid's annotations are reset first, so repeated calls on the same grid give
/// identical results. Fails before touching the grid if either endpoint is out of
/// bounds or a wall, or if they coincide.
pub fn search(
    grid: &mut Grid,
    start: Point,
    end: Point,
    mode: Mode,
) -> Result<SearchResult, SearchError> {
    mode.search(grid, start, end)
}

impl Grid {
    /// Searches between the cells marked with [set_start](Grid::set_start) and
    /// [set_end](Grid::set_end).
    pub fn search(&mut self, mode: Mode) -> Result<SearchResult, SearchError> {
        let start = self.start().ok_or(SearchError::MissingStart)?;
        let end = self.end().ok_or(SearchError::MissingEnd)?;
        search(self, start, end, mode)
    }
}

/// A search in progress. Each call to [next](Iterator::next) runs the expansion until
/// one more cell is finalized and yields it; the start and end are never yielded. Once
/// the iterator is exhausted, [into_result](Search::into_result) assembles the
/// [SearchResult].
///
/// The search holds the grid mutably, so walls cannot change while it runs.
pub struct Search<'a, S: GridSolver> {
    grid: &'a mut Grid,
    solver: &'a S,
    start: usize,
    end: usize,
    goal: Point,
    frontier: Frontier,
    visit_order: Vec<Point>,
    found: Option<bool>,
}

impl<'a, S: GridSolver> Search<'a, S> {
    pub fn new(
        grid: &'a mut Grid,
        solver: &'a S,
        start: Point,
        goal: Point,
    ) -> Result<Search<'a, S>, SearchError> {
        let start_ix = grid.checked_ix(start)?;
        let end_ix = grid.checked_ix(goal)?;
        if start_ix == end_ix {
            return Err(SearchError::StartIsEnd(start));
        }
        for (p, ix) in [(start, start_ix), (goal, end_ix)] {
            if grid.cell_at(ix).role.blocked() {
                return Err(SearchError::Blocked(p));
            }
        }
        debug!("Searching from {} to {}", start, goal);
        grid.reset();
        grid.update();

        let h = solver.heuristic(&start, &goal);
        let cell = grid.cell_at_mut(start_ix);
        cell.best_cost = 0;
        cell.estimated_cost = h;
        let mut frontier = Frontier::new();
        frontier.push(h, start_ix);

        Ok(Search {
            grid,
            solver,
            start: start_ix,
            end: end_ix,
            goal,
            frontier,
            visit_order: Vec::new(),
            found: None,
        })
    }

    /// [None] while the search is still running.
    pub fn found(&self) -> Option<bool> {
        self.found
    }

    /// Cells finalized so far.
    pub fn visit_order(&self) -> &[Point] {
        &self.visit_order
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    fn relax_neighbours(&mut self, ix: usize) {
        let current = self.grid.point_of(ix);
        let candidate = self.grid.cell_at(ix).best_cost + UNIT_COST;
        for neighbour in self.grid.neighbors(current) {
            let n_ix = self.grid.get_ix_point(&neighbour);
            if candidate >= self.grid.cell_at(n_ix).best_cost {
                continue;
            }
            let priority = candidate + self.solver.heuristic(&neighbour, &self.goal);
            let cell = self.grid.cell_at_mut(n_ix);
            debug_assert!(!cell.finalized);
            cell.best_cost = candidate;
            cell.estimated_cost = priority;
            cell.predecessor = Some(ix);
            self.frontier.push(priority, n_ix);
        }
    }

    /// Drives the search to completion and builds the result.
    pub fn into_result(mut self) -> SearchResult {
        while self.next().is_some() {}
        let found = self.found == Some(true);
        let path = if found {
            info!(
                "Path of {} cells found after finalizing {}",
                self.grid.cell_at(self.end).best_cost + 1,
                self.visit_order.len()
            );
            self.grid.path_to(self.end)
        } else {
            let start = self.grid.point_of(self.start);
            if self.grid.reachable(&start, &self.goal) {
                warn!("Reachable goal could not be pathed to, are the components correct?");
            } else {
                info!("{} is not reachable from {}", self.goal, start);
            }
            Vec::new()
        };
        SearchResult {
            found,
            path,
            visit_order: self.visit_order,
        }
    }
}

impl<S: GridSolver> Iterator for Search<'_, S> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.found.is_some() {
            return None;
        }
        while let Some(entry) = self.frontier.pop() {
            let cell = self.grid.cell_at(entry.index);
            if cell.finalized || entry.priority > cell.estimated_cost {
                trace!("Skipping stale frontier entry {}", entry.sequence);
                continue;
            }
            if entry.index == self.end {
                self.found = Some(true);
                return None;
            }
            self.grid.cell_at_mut(entry.index).finalized = true;
            self.relax_neighbours(entry.index);
            if entry.index != self.start {
                let p = self.grid.point_of(entry.index);
                self.visit_order.push(p);
                return Some(p);
            }
        }
        self.found = Some(false);
        None
    }
}

impl<S: GridSolver> FusedIterator for Search<'_, S> {}
