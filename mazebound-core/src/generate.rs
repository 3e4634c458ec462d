//! Randomized maze construction under a full-connectivity guarantee

use crate::grid::{CellType, Coord, Grid};
use crate::solver;
use rand::Rng;
use thiserror::Error;

/// Attempt budget for fair start placement
pub const START_ATTEMPTS: usize = 10_000;

/// Default score margin separating freshly placed agents
pub const START_FAIRNESS: u32 = 5;

/// Placement failures surfaced to the caller instead of looping forever
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("no fair start location found in {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Build a `width x height` maze: walled border, one exit carved into a side
/// border, then random interior walls that never disconnect the playfield.
pub fn generate<R: Rng>(width: i32, height: i32, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height);
    place_exit(&mut grid, rng);
    carve_walls(&mut grid, rng);
    grid
}

/// Open the exit on the border edge biased by a random interior cell's offset
/// from the grid center.
fn place_exit<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let width = grid.width();
    let height = grid.height();
    let random_x = rng.gen_range(1..=width);
    let random_y = rng.gen_range(1..=height);

    let dist_x = random_x as f64 - width as f64 / 2.0;
    let dist_y = random_y as f64 - height as f64 / 2.0;

    let exit_x = if dist_x < 0.0 { 0 } else { width + 1 };
    if dist_x.abs() > dist_y.abs() {
        // The vertical-edge probe never survives the unconditional store
        // below; exits only ever open on the left or right border.
        let edge_y = if dist_y < 0.0 { 0 } else { height + 1 };
        let edge_kind = grid.get(random_x, edge_y).kind;
        grid.get_mut(exit_x, random_y).kind = edge_kind;
    }
    grid.get_mut(exit_x, random_y).kind = CellType::Exit;
    grid.set_exit(Coord::new(exit_x, random_y));
}

/// Try `area` random interior coordinates, committing each as a wall only
/// when all three placement guards pass. Trials are sequential: every trial
/// sees the walls committed before it.
fn carve_walls<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for _ in 0..grid.area() {
        let coord = Coord::new(
            rng.gen_range(1..=grid.width()),
            rng.gen_range(1..=grid.height()),
        );
        if wall_fits(grid, coord, rng) {
            grid.cell_mut(coord).kind = CellType::Wall;
        }
    }
}

/// The three placement guards, cheapest first
fn wall_fits<R: Rng>(grid: &Grid, coord: Coord, rng: &mut R) -> bool {
    // Never double up a wall or overwrite the exit
    if grid.cell(coord).kind != CellType::Path {
        return false;
    }
    // Avoid thick wall clusters
    if moore_wall_count(grid, coord) > 3 {
        return false;
    }
    keeps_grid_solvable(grid, coord, rng)
}

/// Walls among the eight surrounding cells (clamped at the border)
fn moore_wall_count(grid: &Grid, coord: Coord) -> usize {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if grid.get(coord.x + dx, coord.y + dy).kind == CellType::Wall {
                count += 1;
            }
        }
    }
    count
}

/// Tentatively place the wall on a scratch copy and require every path cell
/// to keep a finite distance to the exit.
fn keeps_grid_solvable<R: Rng>(grid: &Grid, coord: Coord, rng: &mut R) -> bool {
    let Some(exit) = grid.exit() else {
        debug_assert!(false, "wall carving requires a placed exit");
        return false;
    };
    let mut trial = grid.clone();
    trial.cell_mut(coord).kind = CellType::Wall;
    solver::cache(&mut trial, exit, rng);

    let area = trial.area();
    let solvable = trial
        .iter()
        .all(|cell| cell.kind != CellType::Path || cell.score < area);
    solvable
}

/// Pick a random non-wall interior cell whose cached score differs from
/// `avoid` by at least `fairness`.
///
/// Requires a cached distance field. The search is bounded: after
/// [`START_ATTEMPTS`] rejected draws the caller gets an explicit error and
/// decides whether to relax the margin or abort.
pub fn choose_start<R: Rng>(
    grid: &Grid,
    avoid: u32,
    fairness: u32,
    rng: &mut R,
) -> Result<Coord, PlacementError> {
    for _ in 0..START_ATTEMPTS {
        let coord = Coord::new(
            rng.gen_range(1..=grid.width()),
            rng.gen_range(1..=grid.height()),
        );
        let cell = grid.cell(coord);
        if cell.kind == CellType::Wall || cell.score.abs_diff(avoid) < fairness {
            continue;
        }
        return Ok(coord);
    }
    Err(PlacementError::Exhausted {
        attempts: START_ATTEMPTS,
    })
}
