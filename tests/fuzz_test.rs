/// Fuzzes the search by checking on many random grids that a path is found exactly when the
/// goal shares a connected component with the start, and that both modes agree on the
/// path length while A* never finalizes more cells than Dijkstra.
use grid_search::{point, search, Grid, Mode, Point, SearchResult};
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, start: Point, end: Point) -> Grid {
    let mut grid = Grid::new(n);
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            let p = point(row, col);
            if p != start && p != end && rng.gen_bool(0.35) {
                grid.set_wall(p).unwrap();
            }
        }
    }
    grid.update();
    grid
}

fn visualize_grid(grid: &Grid, start: &Point, end: &Point) {
    let n = grid.size() as i32;
    for row in 0..n {
        for col in 0..n {
            let p = point(row, col);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.is_open(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_valid_path(grid: &Grid, result: &SearchResult, start: Point, end: Point) {
    assert_eq!(result.path.first(), Some(&start));
    assert_eq!(result.path.last(), Some(&end));
    assert!(result.path.iter().all(|p| grid.is_open(*p)));
    assert!(result
        .path
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1));
    assert!(result.path.len() as i32 > start.manhattan_distance(&end));
}

#[test]
fn fuzz() {
    const N: usize = 12;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = point(0, 0);
    let end = point(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng, start, end);
        let reachable = grid.reachable(&start, &end);
        let dijkstra = search(&mut grid, start, end, Mode::Dijkstra).unwrap();
        let astar = search(&mut grid, start, end, Mode::AStar).unwrap();
        // Show the grid if the outcome disagrees with the components
        if dijkstra.found != reachable || astar.found != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(dijkstra.found, reachable);
        assert_eq!(astar.found, reachable);
        assert_eq!(dijkstra.path.len(), astar.path.len());
        assert!(astar.visit_order.len() <= dijkstra.visit_order.len());
        if reachable {
            assert_valid_path(&grid, &dijkstra, start, end);
            assert_valid_path(&grid, &astar, start, end);
        } else {
            assert_eq!(dijkstra.visit_order.len(), astar.visit_order.len());
        }
    }
}

/// Every cell is finalized at most once and never the start or end.
#[test]
fn fuzz_visit_order() {
    const N: usize = 10;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let start = point(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = point(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if start == end {
            continue;
        }
        let mut grid = random_grid(N, &mut rng, start, end);
        for mode in [Mode::Dijkstra, Mode::AStar] {
            let result = search(&mut grid, start, end, mode).unwrap();
            assert!(result.visit_order.iter().all_unique());
            assert!(!result.visit_order.contains(&start));
            assert!(!result.visit_order.contains(&end));
            assert!(result.visit_order.iter().all(|p| grid.is_open(*p)));
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 16;
    let mut rng = StdRng::seed_from_u64(2);
    let start = point(0, 0);
    let end = point(N as i32 - 1, 0);
    for _ in 0..200 {
        let mut grid = random_grid(N, &mut rng, start, end);
        let mut copy = grid.clone();
        for mode in [Mode::Dijkstra, Mode::AStar] {
            let a = search(&mut grid, start, end, mode).unwrap();
            let b = search(&mut copy, start, end, mode).unwrap();
            let c = search(&mut grid, start, end, mode).unwrap();
            assert_eq!(a, b);
            assert_eq!(a, c);
        }
    }
}
