//! MAZEBOUND Core - maze engine
//!
//! This crate provides the engine behind the maze chase game:
//! - Bordered grid model with clamped coordinate access
//! - Flood-fill distance fields and shortest-path reconstruction
//! - Randomized maze generation under a solvability guarantee
//! - Pursuit strategies for the hunter, selected by difficulty

pub mod ai;
pub mod generate;
pub mod grid;
pub mod solver;

// Re-exports for convenient access
pub use ai::{Difficulty, FloodFill, Pursuit, RandomWalk};
pub use generate::{choose_start, generate, PlacementError, START_ATTEMPTS, START_FAIRNESS};
pub use grid::{Cell, CellType, Coord, Direction, Grid};
pub use solver::{cache, reconstruct_path, score, solve};
