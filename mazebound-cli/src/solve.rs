//! Solve command - walk the shortest path to the exit

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mazebound_core::{cache, generate, reconstruct_path, CellType, Coord, Grid};

use crate::render;

#[derive(Args)]
pub struct SolveArgs {
    /// Playfield width, border excluded
    #[arg(long, default_value = "12")]
    pub width: i32,

    /// Playfield height, border excluded
    #[arg(long, default_value = "12")]
    pub height: i32,

    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Load the maze from a JSON file instead of generating one
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Start cell as "X,Y"; the farthest reachable cell when omitted
    #[arg(long, value_name = "X,Y")]
    pub from: Option<String>,
}

pub fn run(args: SolveArgs) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut grid = match &args.input {
        Some(path) => Grid::load(path).with_context(|| format!("reading {}", path.display()))?,
        None => generate(args.width, args.height, &mut rng),
    };
    let exit = grid.exit().context("grid has no exit")?;
    cache(&mut grid, exit, &mut rng);

    let start = match &args.from {
        Some(text) => parse_coord(text)?,
        None => farthest_cell(&grid).context("no reachable cell to start from")?,
    };
    tracing::info!("Solving from ({}, {}) to exit {:?}", start.x, start.y, exit);

    print!("{}", render::ascii(&grid));
    match reconstruct_path(&grid, start) {
        Some(path) => {
            println!(
                "Path from ({}, {}): {} steps",
                start.x,
                start.y,
                path.len() - 1
            );
            let coords: Vec<String> = path
                .iter()
                .map(|cell| format!("({},{})", cell.coord.x, cell.coord.y))
                .collect();
            println!("{}", coords.join(" -> "));
        }
        None => println!("No path from ({}, {}) to the exit", start.x, start.y),
    }
    Ok(())
}

fn parse_coord(text: &str) -> Result<Coord> {
    let (x, y) = text
        .split_once(',')
        .with_context(|| format!("expected X,Y but got '{}'", text))?;
    Ok(Coord::new(x.trim().parse()?, y.trim().parse()?))
}

/// Reachable non-wall cell with the highest cached score
fn farthest_cell(grid: &Grid) -> Option<Coord> {
    grid.iter()
        .filter(|c| c.kind != CellType::Wall && c.score < grid.area())
        .max_by_key(|c| c.score)
        .map(|c| c.coord)
}
