use grid_search::{point, Grid, Mode};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Both modes are run; they find paths of equal length but finalize different cells.

fn main() -> Result<(), grid_search::SearchError> {
    let mut grid = Grid::new(3);
    grid.set_wall(point(1, 1))?;
    grid.set_start(point(0, 0))?;
    grid.set_end(point(2, 2))?;
    println!("{}", grid);
    for mode in [Mode::Dijkstra, Mode::AStar] {
        let result = grid.search(mode)?;
        println!("{mode}:");
        println!("  visited: {:?}", result.visit_order);
        println!("  path:    {:?}", result.path);
    }
    Ok(())
}
