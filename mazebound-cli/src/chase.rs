//! Chase command - headless hunter-vs-runner simulation
//!
//! The runner plays an every-tick flood fill toward the exit; the hunter
//! plays the selected difficulty toward the runner's live position. The core
//! stays pure: this module owns the loop, move application, and win checks.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mazebound_core::{
    cache, choose_start, generate, CellType, Coord, Difficulty, Direction, FloodFill, Grid,
    Pursuit, START_FAIRNESS,
};

#[derive(Args)]
pub struct ChaseArgs {
    /// Playfield width, border excluded
    #[arg(long, default_value = "12")]
    pub width: i32,

    /// Playfield height, border excluded
    #[arg(long, default_value = "12")]
    pub height: i32,

    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Hunter difficulty
    #[arg(long, value_enum, default_value = "hard")]
    pub difficulty: DifficultyArg,

    /// Turn budget before the chase is called off
    #[arg(long, default_value = "200")]
    pub turns: u32,

    /// Print every turn
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Hard,
    VeryHard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::VeryHard => Difficulty::VeryHard,
        }
    }
}

/// How a chase ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    RunnerEscaped { turn: u32 },
    RunnerCaught { turn: u32 },
    TurnsExhausted,
}

pub fn run(args: ChaseArgs) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut grid = generate(args.width, args.height, &mut rng);
    let exit = grid.exit().context("generated grid has no exit")?;
    cache(&mut grid, exit, &mut rng);

    // Runner spawns away from the exit, hunter a fair margin from the runner
    let runner_start = choose_start(&grid, 0, START_FAIRNESS, &mut rng)?;
    let runner_score = grid.cell(runner_start).score;
    let hunter_start = choose_start(&grid, runner_score, START_FAIRNESS, &mut rng)?;

    tracing::info!(
        "Chase on {}x{} maze: runner {:?}, hunter {:?} ({:?})",
        args.width,
        args.height,
        runner_start,
        hunter_start,
        args.difficulty
    );

    let outcome = play(
        &grid,
        exit,
        runner_start,
        hunter_start,
        args.difficulty.into(),
        args.turns,
        args.seed,
        args.verbose,
    );

    match outcome {
        Outcome::RunnerEscaped { turn } => println!("Runner escaped on turn {}", turn),
        Outcome::RunnerCaught { turn } => println!("Runner caught on turn {}", turn),
        Outcome::TurnsExhausted => println!("No result within {} turns", args.turns),
    }
    Ok(())
}

fn play(
    grid: &Grid,
    exit: Coord,
    runner_start: Coord,
    hunter_start: Coord,
    difficulty: Difficulty,
    turns: u32,
    seed: u64,
    verbose: bool,
) -> Outcome {
    let mut runner_ai = FloodFill::with_seed(1, seed ^ 0x52);
    let mut hunter_ai = difficulty.strategy(seed ^ 0x48);
    let mut runner = runner_start;
    let mut hunter = hunter_start;

    for turn in 1..=turns {
        runner = apply_move(grid, runner, runner_ai.next(runner, grid, exit));
        hunter = apply_move(grid, hunter, hunter_ai.next(hunter, grid, runner));

        if verbose {
            println!(
                "turn {:3}: runner ({}, {})  hunter ({}, {})",
                turn, runner.x, runner.y, hunter.x, hunter.y
            );
        }

        // Exit check wins over the collision check on a shared turn
        if runner == exit {
            return Outcome::RunnerEscaped { turn };
        }
        if runner == hunter {
            return Outcome::RunnerCaught { turn };
        }
    }
    Outcome::TurnsExhausted
}

/// Walls block movement; a blocked move becomes a stay
fn apply_move(grid: &Grid, from: Coord, direction: Direction) -> Coord {
    let dest = grid.step(from, direction);
    if dest.kind == CellType::Wall {
        from
    } else {
        dest.coord
    }
}
