//! Request and report shapes for serving searches over a JSON API. Each request is run
//! on a freshly built [Grid] of [DEFAULT_SIZE](crate::DEFAULT_SIZE), nothing carries over
//! between requests.
use crate::error::SearchError;
use crate::grid::{point, Grid};
use crate::search::SearchResult;
use crate::solver::Mode;
use grid_util::point::Point;
use log::debug;
use serde::{Deserialize, Serialize};

pub const FOUND_MESSAGE: &str = "Path found!";
pub const NOT_FOUND_MESSAGE: &str = "No path found!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl From<Point> for Position {
    fn from(p: Point) -> Position {
        Position { row: p.y, col: p.x }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Point {
        point(p.row, p.col)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallLayout {
    #[serde(default)]
    pub walls: Vec<Position>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub grid: WallLayout,
    pub start: Position,
    pub end: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub success: bool,
    pub path: Vec<Position>,
    pub visited: Vec<Position>,
    pub message: String,
}

impl SearchRequest {
    /// Builds the grid described by the request. Walls outside the grid or on the start
    /// and end cells are ignored.
    pub fn build_grid(&self) -> Result<Grid, SearchError> {
        let mut grid = Grid::default();
        let (start, end) = (Point::from(self.start), Point::from(self.end));
        for &wall in &self.grid.walls {
            let p = Point::from(wall);
            if !grid.in_bounds(p) || p == start || p == end {
                debug!("Ignoring wall at {}", p);
                continue;
            }
            grid.set_wall(p)?;
        }
        grid.set_start(start)?;
        grid.set_end(end)?;
        Ok(grid)
    }

    pub fn run(&self, mode: Mode) -> Result<SearchReport, SearchError> {
        let mut grid = self.build_grid()?;
        grid.search(mode).map(SearchReport::from)
    }

    /// Like [run](Self::run), but reports rejected input instead of failing.
    pub fn respond(&self, mode: Mode) -> SearchReport {
        self.run(mode)
            .unwrap_or_else(|err| SearchReport::rejected(&err))
    }
}

impl SearchReport {
    pub fn rejected(err: &SearchError) -> SearchReport {
        SearchReport {
            success: false,
            path: Vec::new(),
            visited: Vec::new(),
            message: err.to_string(),
        }
    }
}

impl From<SearchResult> for SearchReport {
    fn from(result: SearchResult) -> SearchReport {
        SearchReport {
            success: result.found,
            path: result.path.into_iter().map(Position::from).collect(),
            visited: result.visit_order.into_iter().map(Position::from).collect(),
            message: if result.found {
                FOUND_MESSAGE
            } else {
                NOT_FOUND_MESSAGE
            }
            .to_owned(),
        }
    }
}
