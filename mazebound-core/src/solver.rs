//! Flood-fill distance fields and shortest-path reconstruction

use crate::grid::{Cell, CellType, Coord, Direction, Grid};
use rand::seq::SliceRandom;
use rand::Rng;

/// Assign every reachable cell its minimum cardinal-step distance from `goal`.
///
/// Relaxation over an explicit worklist: a cell is only overwritten when the
/// proposed score is strictly lower than the stored one, which bounds the work
/// and terminates cycles. Scores must already be reset to the sentinel;
/// [`cache`] does exactly that before delegating here.
pub fn score<R: Rng>(grid: &mut Grid, goal: Coord, rng: &mut R) {
    let mut worklist = vec![(goal, 0u32)];
    while let Some((coord, proposed)) = worklist.pop() {
        let cell = grid.cell_mut(coord);
        if cell.kind == CellType::Wall || cell.score <= proposed {
            continue;
        }
        cell.score = proposed;

        // Expansion order only decides which of several equally short routes
        // the walker later prefers; converged scores are exact either way.
        let mut directions = Direction::CARDINAL;
        directions.shuffle(rng);
        for direction in directions {
            worklist.push((coord.step(direction), proposed + 1));
        }
    }
}

/// Reset the field and recompute it in full against `goal`.
///
/// Idempotent for a fixed wall layout; must be rerun after any wall change.
pub fn cache<R: Rng>(grid: &mut Grid, goal: Coord, rng: &mut R) {
    grid.reset_scores();
    score(grid, goal, rng);
}

/// Walk from `start` down the cached field until the goal's score of zero.
///
/// Returns `None` when `start` never received a real score. A path of length
/// one means `start` already sits on the goal; callers that need an actual
/// move must check for length two or more. Neighbor ties break on the fixed
/// [`Direction::CARDINAL`] order, so the result is deterministic for a given
/// field.
pub fn reconstruct_path(grid: &Grid, start: Coord) -> Option<Vec<Cell>> {
    let area = grid.area();
    let mut current = *grid.cell(start);
    if current.score >= area {
        return None;
    }

    let mut path = vec![current];
    let mut steps = 0u32;
    while current.score > 0 {
        steps += 1;
        if steps > area {
            debug_assert!(false, "walk from {:?} exceeded {} steps", start, area);
            return None;
        }
        let next = Direction::CARDINAL
            .iter()
            .map(|&direction| grid.step(current.coord, direction))
            .find(|neighbor| neighbor.score < current.score);
        let Some(next) = next else {
            debug_assert!(
                false,
                "no descending neighbor at {:?} (score {})",
                current.coord, current.score
            );
            return None;
        };
        debug_assert_eq!(next.score, current.score - 1, "scores must fall in unit steps");
        path.push(*next);
        current = *next;
    }
    Some(path)
}

/// Score a scratch copy against `goal` and walk a path from `start`.
///
/// The live grid keeps whatever field it already carries, so a pursuit
/// re-plan never clobbers the cache other agents are reading.
pub fn solve<R: Rng>(grid: &Grid, start: Coord, goal: Coord, rng: &mut R) -> Option<Vec<Cell>> {
    let mut scratch = grid.clone();
    cache(&mut scratch, goal, rng);
    reconstruct_path(&scratch, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// 3x3 interior (5x5 full), no interior walls, exit marked at (3, 1)
    fn open_grid() -> (Grid, Coord) {
        let mut grid = Grid::new(3, 3);
        let goal = Coord::new(3, 1);
        grid.cell_mut(goal).kind = CellType::Exit;
        (grid, goal)
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_scores_spread_outward_from_goal() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());

        // Manhattan distances on an open grid
        assert_eq!(grid.cell(goal).score, 0);
        assert_eq!(grid.get(2, 1).score, 1);
        assert_eq!(grid.get(3, 2).score, 1);
        assert_eq!(grid.get(1, 1).score, 2);
        assert_eq!(grid.get(2, 2).score, 2);
        assert_eq!(grid.get(3, 3).score, 2);
        assert_eq!(grid.get(1, 2).score, 3);
        assert_eq!(grid.get(2, 3).score, 3);
        assert_eq!(grid.get(1, 3).score, 4);
    }

    #[test]
    fn test_walls_keep_sentinel_scores() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());
        for cell in grid.iter() {
            if cell.kind == CellType::Wall {
                assert_eq!(cell.score, grid.sentinel());
            }
        }
    }

    #[test]
    fn test_path_length_matches_score() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());

        // Farthest interior cell sits at distance 4
        let path = reconstruct_path(&grid, Coord::new(1, 3)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0].coord, Coord::new(1, 3));
        assert_eq!(path.last().unwrap().coord, goal);

        // Every reachable cell round-trips: score k yields k + 1 cells
        for cell in grid.iter() {
            if cell.kind == CellType::Wall {
                continue;
            }
            let path = reconstruct_path(&grid, cell.coord).unwrap();
            assert_eq!(path.len() as u32, cell.score + 1);
        }
    }

    #[test]
    fn test_path_scores_fall_in_unit_steps() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());
        let path = reconstruct_path(&grid, Coord::new(1, 3)).unwrap();
        for pair in path.windows(2) {
            assert_eq!(pair[0].score, pair[1].score + 1);
        }
        assert_eq!(path.last().unwrap().score, 0);
    }

    #[test]
    fn test_start_on_goal_yields_single_cell() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());
        let path = reconstruct_path(&grid, goal).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].coord, goal);
    }

    #[test]
    fn test_unreachable_start_has_no_path() {
        let (mut grid, goal) = open_grid();
        // Box in the (1, 1) corner
        grid.get_mut(2, 1).kind = CellType::Wall;
        grid.get_mut(1, 2).kind = CellType::Wall;
        cache(&mut grid, goal, &mut rng());

        assert_eq!(grid.get(1, 1).score, grid.sentinel());
        assert!(reconstruct_path(&grid, Coord::new(1, 1)).is_none());
    }

    #[test]
    fn test_cache_is_idempotent() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());
        let first: Vec<u32> = grid.iter().map(|c| c.score).collect();
        cache(&mut grid, goal, &mut ChaCha8Rng::seed_from_u64(999));
        let second: Vec<u32> = grid.iter().map(|c| c.score).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_clears_stale_scores() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());
        // Walling off a cell invalidates the field; a fresh cache must not
        // leave its old score behind
        grid.get_mut(2, 1).kind = CellType::Wall;
        grid.get_mut(1, 2).kind = CellType::Wall;
        cache(&mut grid, goal, &mut rng());
        assert_eq!(grid.get(1, 1).score, grid.sentinel());
        assert_eq!(grid.get(2, 1).score, grid.sentinel());
    }

    #[test]
    fn test_solve_leaves_live_grid_untouched() {
        let (mut grid, goal) = open_grid();
        cache(&mut grid, goal, &mut rng());
        let before: Vec<u32> = grid.iter().map(|c| c.score).collect();

        // Re-plan against a different goal on a scratch copy
        let path = solve(&grid, Coord::new(1, 1), Coord::new(3, 3), &mut rng()).unwrap();
        assert_eq!(path[0].coord, Coord::new(1, 1));
        assert_eq!(path.last().unwrap().coord, Coord::new(3, 3));

        let after: Vec<u32> = grid.iter().map(|c| c.score).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_scoring_detours_around_walls() {
        let mut grid = Grid::new(3, 3);
        let goal = Coord::new(3, 1);
        grid.cell_mut(goal).kind = CellType::Exit;
        grid.get_mut(2, 1).kind = CellType::Wall;
        cache(&mut grid, goal, &mut rng());

        // (1, 1) must route below the wall: down, right, right, up
        assert_eq!(grid.get(1, 1).score, 4);
        let path = reconstruct_path(&grid, Coord::new(1, 1)).unwrap();
        assert_eq!(path.len(), 5);
    }
}
