//! Pursuit strategies for the hunter

use crate::grid::{Coord, Direction, Grid};
use crate::solver;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// One step of pursuit: the next move toward `goal` on the live grid.
///
/// Implementations may keep internal pacing state; callers invoke `next`
/// once per tick and apply (or discard) the returned direction themselves.
pub trait Pursuit {
    fn next(&mut self, position: Coord, grid: &Grid, goal: Coord) -> Direction;
}

/// Baseline that ignores the maze entirely and drifts at random
pub struct RandomWalk {
    rng: ChaCha8Rng,
}

impl RandomWalk {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl Pursuit for RandomWalk {
    fn next(&mut self, _position: Coord, _grid: &Grid, _goal: Coord) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Flood-fill chaser that only re-plans every `thinking`-th call.
///
/// Off-cycle calls return [`Direction::Stay`], so a larger interval plays
/// slower and easier; an interval of 1 re-plans and acts on every call.
pub struct FloodFill {
    thinking: u32,
    current: u32,
    rng: ChaCha8Rng,
}

impl FloodFill {
    pub fn new(thinking: u32) -> Self {
        Self::with_seed(thinking, 42)
    }

    pub fn with_seed(thinking: u32, seed: u64) -> Self {
        assert!(thinking > 0, "thinking interval must be at least 1");
        Self {
            thinking,
            current: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Pursuit for FloodFill {
    fn next(&mut self, position: Coord, grid: &Grid, goal: Coord) -> Direction {
        self.current = (self.current + 1) % self.thinking;
        if self.current != 0 {
            return Direction::Stay;
        }
        match solver::solve(grid, position, goal, &mut self.rng) {
            Some(path) if path.len() >= 2 => {
                let (dx, dy) = path[1].coord.delta_from(position);
                Direction::from_delta(dx, dy).unwrap_or(Direction::Stay)
            }
            // Already on the goal, or the goal is walled off
            _ => Direction::Stay,
        }
    }
}

/// Hunter difficulty tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// The strategy behind each tier, ready to drive with `next`
    pub fn strategy(self, seed: u64) -> Box<dyn Pursuit> {
        match self {
            Difficulty::Easy => Box::new(RandomWalk::with_seed(seed)),
            Difficulty::Hard => Box::new(FloodFill::with_seed(4, seed)),
            Difficulty::VeryHard => Box::new(FloodFill::with_seed(1, seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellType;

    /// 3x3 interior (5x5 full), no interior walls, goal at (3, 1)
    fn open_grid() -> (Grid, Coord) {
        let mut grid = Grid::new(3, 3);
        let goal = Coord::new(3, 1);
        grid.cell_mut(goal).kind = CellType::Exit;
        (grid, goal)
    }

    #[test]
    fn test_random_walk_is_roughly_uniform() {
        let (grid, goal) = open_grid();
        let mut walk = RandomWalk::with_seed(7);
        let mut counts = [0u32; 5];
        for _ in 0..10_000 {
            let direction = walk.next(Coord::new(1, 1), &grid, goal);
            let index = Direction::ALL.iter().position(|&d| d == direction).unwrap();
            counts[index] += 1;
        }
        // Expect ~2000 each; wide bounds keep the check statistical, not exact
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (1700..=2300).contains(count),
                "direction {:?} drawn {} times",
                Direction::ALL[index],
                count
            );
        }
    }

    #[test]
    fn test_flood_fill_thinks_on_schedule() {
        let (grid, goal) = open_grid();
        let mut chaser = FloodFill::new(3);
        let position = Coord::new(1, 3);

        assert_eq!(chaser.next(position, &grid, goal), Direction::Stay);
        assert_eq!(chaser.next(position, &grid, goal), Direction::Stay);
        let third = chaser.next(position, &grid, goal);
        assert!(Direction::CARDINAL.contains(&third), "got {:?}", third);
    }

    #[test]
    fn test_flood_fill_interval_one_acts_every_call() {
        let (grid, goal) = open_grid();
        let mut chaser = FloodFill::new(1);
        for _ in 0..3 {
            let direction = chaser.next(Coord::new(1, 3), &grid, goal);
            assert!(Direction::CARDINAL.contains(&direction));
        }
    }

    #[test]
    fn test_flood_fill_heads_toward_goal() {
        let (grid, goal) = open_grid();
        let mut chaser = FloodFill::new(1);
        // (1, 1) -> (3, 1) runs straight right; Up/Left hit border walls and
        // Down moves away, so the first descending neighbor is Right
        assert_eq!(chaser.next(Coord::new(1, 1), &grid, goal), Direction::Right);
    }

    #[test]
    fn test_flood_fill_stays_on_goal() {
        let (grid, goal) = open_grid();
        let mut chaser = FloodFill::new(1);
        assert_eq!(chaser.next(goal, &grid, goal), Direction::Stay);
    }

    #[test]
    fn test_flood_fill_stays_when_goal_unreachable() {
        let (mut grid, goal) = open_grid();
        // Box the goal in
        grid.get_mut(2, 1).kind = CellType::Wall;
        grid.get_mut(3, 2).kind = CellType::Wall;
        let mut chaser = FloodFill::new(1);
        assert_eq!(chaser.next(Coord::new(1, 3), &grid, goal), Direction::Stay);
    }

    #[test]
    fn test_difficulty_tiers_dispatch() {
        let (grid, goal) = open_grid();
        let position = Coord::new(1, 3);

        // VeryHard re-plans immediately
        let mut very_hard = Difficulty::VeryHard.strategy(7);
        assert!(Direction::CARDINAL.contains(&very_hard.next(position, &grid, goal)));

        // Hard thinks for three calls before acting
        let mut hard = Difficulty::Hard.strategy(7);
        for _ in 0..3 {
            assert_eq!(hard.next(position, &grid, goal), Direction::Stay);
        }
        assert!(Direction::CARDINAL.contains(&hard.next(position, &grid, goal)));

        // Easy always yields some direction, Stay included
        let mut easy = Difficulty::Easy.strategy(7);
        assert!(Direction::ALL.contains(&easy.next(position, &grid, goal)));
    }
}
