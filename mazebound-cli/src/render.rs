//! ASCII grid dumps shared by the commands

use mazebound_core::{CellType, Grid};

/// Render the grid one character per cell: `#` wall, `.` path, `E` exit
pub fn ascii(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.full_height() {
        for x in 0..grid.full_width() {
            out.push(match grid.get(x, y).kind {
                CellType::Wall => '#',
                CellType::Path => '.',
                CellType::Exit => 'E',
            });
        }
        out.push('\n');
    }
    out
}

/// Render the cached distance field, three columns per cell; walls print `#`
/// and unreached cells print `-`
pub fn scores(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.full_height() {
        for x in 0..grid.full_width() {
            let cell = grid.get(x, y);
            if cell.kind == CellType::Wall {
                out.push_str("   #");
            } else if cell.score >= grid.area() {
                out.push_str("   -");
            } else {
                out.push_str(&format!("{:4}", cell.score));
            }
        }
        out.push('\n');
    }
    out
}
