//! Generate command - build a maze and print it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mazebound_core::{cache, generate};

use crate::render;

#[derive(Args)]
pub struct GenerateArgs {
    /// Playfield width, border excluded
    #[arg(long, default_value = "12")]
    pub width: i32,

    /// Playfield height, border excluded
    #[arg(long, default_value = "12")]
    pub height: i32,

    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Print the grid as JSON instead of ASCII
    #[arg(long)]
    pub json: bool,

    /// Overlay the cached distance-to-exit field
    #[arg(long)]
    pub scores: bool,

    /// Also write the grid as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    tracing::info!(
        "Generating {}x{} maze, seed {}",
        args.width,
        args.height,
        args.seed
    );

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut grid = generate(args.width, args.height, &mut rng);
    let exit = grid.exit().context("generated grid has no exit")?;
    cache(&mut grid, exit, &mut rng);

    if let Some(path) = &args.output {
        grid.save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        print!("{}", render::ascii(&grid));
        if args.scores {
            println!();
            print!("{}", render::scores(&grid));
        }
    }
    Ok(())
}
