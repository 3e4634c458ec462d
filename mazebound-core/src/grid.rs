//! Bordered maze grid with clamped coordinate access

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid coordinates in cell units, border included
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate one step away in the given direction
    pub fn step(self, direction: Direction) -> Coord {
        let (dx, dy) = direction.delta();
        Coord::new(self.x + dx, self.y + dy)
    }

    /// Component-wise offset from `other` to `self`
    pub fn delta_from(self, other: Coord) -> (i32, i32) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Unit step directions; `Stay` is the "no legal move" sentinel and must be
/// kept out of anything that needs cardinal motion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

impl Direction {
    /// The four moving directions, in the tie-break order used when walking
    /// a path back to the goal
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Every direction, `Stay` included
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Stay,
    ];

    /// Unit delta (dx, dy) for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Stay => (0, 0),
        }
    }

    /// Direction matching a unit delta
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        Direction::ALL.iter().copied().find(|d| d.delta() == (dx, dy))
    }
}

/// Cell states: `Path` is walkable, `Wall` blocks, `Exit` is the unique goal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    Path,
    Wall,
    Exit,
}

/// One grid cell; `score` is the cached distance to the active goal and only
/// meaningful after a solve pass
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    pub kind: CellType,
    pub score: u32,
}

/// Cell identity is the coordinate; kind and score do not participate
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

/// A `width x height` playfield wrapped in a one-cell wall border.
///
/// Out-of-range access clamps onto the nearest edge cell, so the border walls
/// double as boundary guards for any step computation. The grid is never
/// resized after construction; agents are tracked by their owners and
/// cross-referenced by coordinate, never stored here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    full_width: i32,
    full_height: i32,
    cells: Vec<Cell>,
    exit: Option<Coord>,
}

impl Grid {
    /// Empty playfield with walls on all four border edges
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let full_width = width + 2;
        let full_height = height + 2;
        let sentinel = (full_width * full_height) as u32 + 1;

        let mut cells = Vec::with_capacity((full_width * full_height) as usize);
        for y in 0..full_height {
            for x in 0..full_width {
                let border = x == 0 || y == 0 || x == full_width - 1 || y == full_height - 1;
                cells.push(Cell {
                    coord: Coord::new(x, y),
                    kind: if border { CellType::Wall } else { CellType::Path },
                    score: sentinel,
                });
            }
        }

        Self {
            width,
            height,
            full_width,
            full_height,
            cells,
            exit: None,
        }
    }

    /// Playfield width, border excluded
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Playfield height, border excluded
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn full_width(&self) -> i32 {
        self.full_width
    }

    pub fn full_height(&self) -> i32 {
        self.full_height
    }

    /// Total cell count, border included
    pub fn area(&self) -> u32 {
        (self.full_width * self.full_height) as u32
    }

    /// Score marking a cell that no solve pass has reached
    pub fn sentinel(&self) -> u32 {
        self.area() + 1
    }

    fn index(&self, x: i32, y: i32) -> usize {
        let x = x.clamp(0, self.full_width - 1);
        let y = y.clamp(0, self.full_height - 1);
        (y * self.full_width + x) as usize
    }

    /// Cell at (x, y), clamped onto the grid; never fails
    pub fn get(&self, x: i32, y: i32) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let index = self.index(x, y);
        &mut self.cells[index]
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        self.get(coord.x, coord.y)
    }

    pub fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        self.get_mut(coord.x, coord.y)
    }

    /// Cell one step from `from`; the clamp means stepping off the grid lands
    /// on a border wall
    pub fn step(&self, from: Coord, direction: Direction) -> &Cell {
        self.cell(from.step(direction))
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Exit coordinate, once the generator has carved one
    pub fn exit(&self) -> Option<Coord> {
        self.exit
    }

    pub(crate) fn set_exit(&mut self, coord: Coord) {
        self.exit = Some(coord);
    }

    /// Reset every score to the sentinel; required before a fresh solve pass
    pub fn reset_scores(&mut self) {
        let sentinel = self.sentinel();
        for cell in &mut self.cells {
            cell.score = sentinel;
        }
    }

    /// Load a grid from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let grid: Grid = serde_json::from_str(&content)?;
        Ok(grid)
    }

    /// Save the grid to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
