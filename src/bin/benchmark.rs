//! Throughput of the two-phase transition engine on random soups

use std::time::Instant;

use anyhow::Context;
use life_engine::{Grid, TransitionEngine};
use rand::Rng;

fn random_soup(size: usize) -> anyhow::Result<Grid> {
    let mut rng = rand::rng();
    let mut grid = Grid::new(size);
    for coord in grid.coords().collect::<Vec<_>>() {
        if rng.random_bool(0.3) {
            grid.set_active(coord, true)?;
        }
    }
    Ok(grid)
}

/// Average milliseconds per generation
fn benchmark_engine(size: usize, iterations: u32) -> anyhow::Result<f64> {
    let engine = TransitionEngine::new();
    let mut grid = random_soup(size).with_context(|| format!("seeding {size}x{size} soup"))?;

    let start = Instant::now();
    for _ in 0..iterations {
        engine.compute_and_commit(&mut grid);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Transition Engine Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_engine(size, iterations)?;
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }

    Ok(())
}
