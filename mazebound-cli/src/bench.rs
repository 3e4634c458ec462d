//! Bench command - time maze generation in bulk
//!
//! Generation runs an O(area) distance-field pass per wall trial, so larger
//! grids get slow quickly; the progress bar keeps long batches honest.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mazebound_core::{generate, CellType};

#[derive(Args)]
pub struct BenchArgs {
    /// Number of mazes to generate
    #[arg(long, default_value = "20")]
    pub count: u64,

    /// Playfield width, border excluded
    #[arg(long, default_value = "12")]
    pub width: i32,

    /// Playfield height, border excluded
    #[arg(long, default_value = "12")]
    pub height: i32,

    /// Base RNG seed; run i uses seed + i
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

pub fn run(args: BenchArgs) -> Result<()> {
    tracing::info!(
        "Benchmarking {} {}x{} mazes",
        args.count,
        args.width,
        args.height
    );

    let bar = ProgressBar::new(args.count);
    let mut timings: Vec<Duration> = Vec::with_capacity(args.count as usize);
    let mut wall_counts: Vec<usize> = Vec::with_capacity(args.count as usize);

    for i in 0..args.count {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed + i);
        let start = Instant::now();
        let grid = generate(args.width, args.height, &mut rng);
        timings.push(start.elapsed());

        let interior_walls = grid
            .iter()
            .filter(|c| {
                c.kind == CellType::Wall
                    && c.coord.x >= 1
                    && c.coord.x <= grid.width()
                    && c.coord.y >= 1
                    && c.coord.y <= grid.height()
            })
            .count();
        wall_counts.push(interior_walls);
        bar.inc(1);
    }
    bar.finish();

    report(&args, &timings, &wall_counts);
    Ok(())
}

fn report(args: &BenchArgs, timings: &[Duration], wall_counts: &[usize]) {
    if timings.is_empty() {
        println!("Nothing to report");
        return;
    }
    let total: Duration = timings.iter().sum();
    let avg = total / timings.len() as u32;
    let slowest = timings.iter().max().copied().unwrap_or_default();
    let avg_walls = wall_counts.iter().sum::<usize>() as f64 / wall_counts.len() as f64;

    println!("=== Generation Benchmark ===");
    println!("Mazes:          {} ({}x{})", args.count, args.width, args.height);
    println!("Total time:     {:.2?}", total);
    println!("Avg per maze:   {:.2?}", avg);
    println!("Slowest:        {:.2?}", slowest);
    println!("Avg walls:      {:.1}", avg_walls);
}
