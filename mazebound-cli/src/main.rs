//! MAZEBOUND CLI - Command-line interface
//!
//! Commands:
//! - generate: Build a maze and print it
//! - solve: Generate a maze and walk the shortest path to the exit
//! - chase: Run a headless hunter-vs-runner simulation
//! - bench: Time maze generation in bulk

use clap::{Parser, Subcommand};

mod bench;
mod chase;
mod generate;
mod render;
mod solve;

#[derive(Parser)]
#[command(name = "mazebound")]
#[command(about = "Maze generation and chase engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a maze and print it
    Generate(generate::GenerateArgs),
    /// Generate a maze and walk the shortest path to the exit
    Solve(solve::SolveArgs),
    /// Run a headless chase between a runner and a hunter
    Chase(chase::ChaseArgs),
    /// Time maze generation in bulk
    Bench(bench::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Solve(args) => solve::run(args),
        Commands::Chase(args) => chase::run(args),
        Commands::Bench(args) => bench::run(args),
    }
}
