use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{point, search, Grid, Mode, Point, DEFAULT_SIZE};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_scenarios(grid: &Grid, number: usize) -> Vec<(Point, Point)> {
    let mut rng = StdRng::seed_from_u64(0);
    let n = grid.size() as i32;
    let mut scenarios = Vec::new();
    while scenarios.len() < number {
        let start = point(rng.gen_range(0..n), rng.gen_range(0..n));
        let end = point(rng.gen_range(0..n), rng.gen_range(0..n));
        if start != end && grid.is_open(start) && grid.is_open(end) {
            scenarios.push((start, end));
        }
    }
    scenarios
}

fn random_grid(density: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = Grid::default();
    for row in 0..DEFAULT_SIZE as i32 {
        for col in 0..DEFAULT_SIZE as i32 {
            if rng.gen_bool(density) {
                grid.set_wall(point(row, col)).unwrap();
            }
        }
    }
    grid.update();
    grid
}

fn mode_bench(c: &mut Criterion) {
    for density in [0.0, 0.3] {
        let mut grid = random_grid(density);
        let scenarios = random_scenarios(&grid, 64);
        for mode in [Mode::Dijkstra, Mode::AStar] {
            c.bench_function(format!("{mode}, wall density {density}").as_str(), |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(search(&mut grid, *start, *end, mode).unwrap());
                    }
                })
            });
        }
    }
}

criterion_group!(benches, mode_bench);
criterion_main!(benches);
