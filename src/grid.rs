use crate::error::SearchError;
use crate::{Cost, DEFAULT_SIZE, INFINITY, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Builds the [Point] for a `(row, col)` pair. Rows grow downwards.
pub fn point(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl Role {
    pub fn blocked(self) -> bool {
        self == Role::Wall
    }
    fn symbol(self) -> char {
        match self {
            Role::Empty => '.',
            Role::Wall => '#',
            Role::Start => 'S',
            Role::End => 'E',
        }
    }
}

/// A grid square together with the annotations written by the last search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub role: Role,
    /// Cheapest known cost from the start.
    pub best_cost: Cost,
    /// Frontier priority: `best_cost` plus the heuristic towards the goal.
    pub estimated_cost: Cost,
    /// Index of the cell this one was reached from.
    pub predecessor: Option<usize>,
    /// Set once the cell has been popped with its final cost.
    pub finalized: bool,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            role: Role::Empty,
            best_cost: INFINITY,
            estimated_cost: INFINITY,
            predecessor: None,
            finalized: false,
        }
    }
}

impl Cell {
    fn clear_annotations(&mut self) {
        self.best_cost = INFINITY;
        self.estimated_cost = INFINITY;
        self.predecessor = None;
        self.finalized = false;
    }
}

/// [Grid] owns a square of [Cell]s stored row-major and keeps track of the start and end
/// markers. Like a pathing grid it also maintains the connected components of the open
/// cells in a [UnionFind], which can answer reachability without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    start: Option<usize>,
    end: Option<usize>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(DEFAULT_SIZE)
    }
}

impl Grid {
    /// Creates an open `size` x `size` grid without start or end.
    pub fn new(size: usize) -> Grid {
        let mut grid = Grid {
            size,
            cells: vec![Cell::default(); size * size],
            start: None,
            end: None,
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.size && (p.y as usize) < self.size
    }
    /// In bounds and not a wall.
    pub fn is_open(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.cells[self.get_ix_point(&p)].role.blocked()
    }
    /// Row-major index of an in-bounds point.
    pub fn get_ix_point(&self, p: &Point) -> usize {
        debug_assert!(self.in_bounds(*p));
        p.y as usize * self.size + p.x as usize
    }
    pub fn point_of(&self, ix: usize) -> Point {
        Point::new((ix % self.size) as i32, (ix / self.size) as i32)
    }
    pub(crate) fn checked_ix(&self, p: Point) -> Result<usize, SearchError> {
        if self.in_bounds(p) {
            Ok(self.get_ix_point(&p))
        } else {
            Err(SearchError::OutOfBounds(p, self.size))
        }
    }
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.in_bounds(p).then(|| &self.cells[self.get_ix_point(&p)])
    }
    pub(crate) fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }
    pub(crate) fn cell_at_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }
    pub fn role(&self, p: Point) -> Option<Role> {
        self.cell(p).map(|c| c.role)
    }
    pub fn start(&self) -> Option<Point> {
        self.start.map(|ix| self.point_of(ix))
    }
    pub fn end(&self) -> Option<Point> {
        self.end.map(|ix| self.point_of(ix))
    }

    /// The open cells adjacent to `p`, always in the order down, up, right, left.
    pub fn neighbors(&self, p: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(p.x, p.y + 1),
            Point::new(p.x, p.y - 1),
            Point::new(p.x + 1, p.y),
            Point::new(p.x - 1, p.y),
        ]
        .into_iter()
        .filter(|n| self.is_open(*n))
        .collect()
    }

    /// Restores every cell's search annotations. Roles are left alone.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_annotations);
    }

    /// Walks the predecessor links from `ix` back to the root of the search tree and
    /// returns the route root first.
    pub fn path_to(&self, ix: usize) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(ix), |&i| self.cells[i].predecessor)
                .map(|i| self.point_of(i))
                .collect();
        path.reverse();
        path
    }

    pub fn set_wall(&mut self, p: Point) -> Result<(), SearchError> {
        let ix = self.checked_ix(p)?;
        if self.start == Some(ix) || self.end == Some(ix) {
            return Err(SearchError::RoleConflict(p));
        }
        self.set_role(ix, Role::Wall);
        Ok(())
    }
    /// Clears whatever occupies `p`, including the start or end marker.
    pub fn set_empty(&mut self, p: Point) -> Result<(), SearchError> {
        let ix = self.checked_ix(p)?;
        if self.start == Some(ix) {
            self.start = None;
        }
        if self.end == Some(ix) {
            self.end = None;
        }
        self.set_role(ix, Role::Empty);
        Ok(())
    }
    /// Marks `p` as the start. A previous start becomes empty.
    pub fn set_start(&mut self, p: Point) -> Result<(), SearchError> {
        let ix = self.checked_ix(p)?;
        if self.end == Some(ix) {
            return Err(SearchError::StartIsEnd(p));
        }
        if let Some(old) = self.start.replace(ix) {
            self.set_role(old, Role::Empty);
        }
        self.set_role(ix, Role::Start);
        Ok(())
    }
    /// Marks `p` as the end. A previous end becomes empty.
    pub fn set_end(&mut self, p: Point) -> Result<(), SearchError> {
        let ix = self.checked_ix(p)?;
        if self.start == Some(ix) {
            return Err(SearchError::StartIsEnd(p));
        }
        if let Some(old) = self.end.replace(ix) {
            self.set_role(old, Role::Empty);
        }
        self.set_role(ix, Role::End);
        Ok(())
    }

    /// Updates a role. Joins newly connected components and flags the components as
    /// dirty if they are (potentially) broken apart into multiple.
    fn set_role(&mut self, ix: usize, role: Role) {
        let was_blocked = self.cells[ix].role.blocked();
        if role.blocked() && !was_blocked {
            self.components_dirty = true;
        } else if !role.blocked() && was_blocked {
            let p = self.point_of(ix);
            for n in self.neighbors(p) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
        self.cells[ix].role = role;
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let n = self.size as i32;
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for (y, x) in iproduct!(0..n, 0..n) {
            let p = Point::new(x, y);
            if !self.is_open(p) {
                continue;
            }
            let p_ix = self.get_ix_point(&p);
            for q in [Point::new(x, y + 1), Point::new(x + 1, y)] {
                if self.is_open(q) {
                    let q_ix = self.get_ix_point(&q);
                    self.components.union(p_ix, q_ix);
                }
            }
        }
    }

    /// Checks if both points are open and on the same component. The components must be
    /// current, see [update](Self::update).
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.is_open(*start)
            && self.is_open(*goal)
            && self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|c| c.role.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
