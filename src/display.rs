use crate::grid::{Grid, Point};

const ALIVE: &str = "██";
const DEAD: &str = "░░";
const TARGET: &str = "TT";

/// Renders the interior for the console, marking an empty target cell.
pub fn render(grid: &Grid, target: Point) -> String {
    let mut out = String::with_capacity(grid.size() * (grid.size() * ALIVE.len() + 1));
    for row in grid.interior() {
        for col in grid.interior() {
            out.push_str(if grid.cell_at(row, col) {
                ALIVE
            } else if Point::new(col, row) == target {
                TARGET
            } else {
                DEAD
            });
        }
        out.push('\n');
    }
    out
}
