use crate::grid::{Grid, Point};

/// Smallest axis-aligned box holding every live cell of a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundaries {
    /// No live cells.
    Empty,
    /// Inclusive bounds in backing-array coordinates.
    Box {
        min_row: usize,
        max_row: usize,
        min_col: usize,
        max_col: usize,
    },
}

impl Boundaries {
    /// Scans the interior of `grid` for live cells.
    pub fn compute(grid: &Grid) -> Self {
        let mut result = Self::Empty;
        for (row, cells) in grid.interior().zip(grid.interior_rows()) {
            for (col, _) in grid.interior().zip(cells).filter(|&(_, &alive)| alive) {
                result = result.include(row, col);
            }
        }
        result
    }

    fn include(self, row: usize, col: usize) -> Self {
        match self {
            Self::Empty => Self::Box {
                min_row: row,
                max_row: row,
                min_col: col,
                max_col: col,
            },
            Self::Box {
                min_row,
                max_row,
                min_col,
                max_col,
            } => Self::Box {
                min_row: min_row.min(row),
                max_row: max_row.max(row),
                min_col: min_col.min(col),
                max_col: max_col.max(col),
            },
        }
    }

    /// Area of the box, `0` when there are no live cells.
    pub fn automaton_size(&self) -> usize {
        match *self {
            Self::Empty => 0,
            Self::Box {
                min_row,
                max_row,
                min_col,
                max_col,
            } => (max_row - min_row + 1) * (max_col - min_col + 1),
        }
    }

    /// Integer midpoint of the box (truncating), `None` when empty.
    pub fn center_of_mass(&self) -> Option<Point> {
        match *self {
            Self::Empty => None,
            Self::Box {
                min_row,
                max_row,
                min_col,
                max_col,
            } => Some(Point::new((max_col + min_col) / 2, (max_row + min_row) / 2)),
        }
    }
}

/// `max(|x1 - x2|, |y1 - y2|)`
pub fn chebyshev_distance(target: Point, center: Point) -> usize {
    target.x.abs_diff(center.x).max(target.y.abs_diff(center.y))
}

/// Distance between the automaton and `target` for one generation.
///
/// Zero when the target cell is alive. An empty automaton is measured
/// from the center of the grid.
pub fn distance_to_target(grid: &Grid, bounds: &Boundaries, target: Point) -> usize {
    if grid.is_alive(target) {
        return 0;
    }
    let center = bounds.center_of_mass().unwrap_or_else(|| grid.center());
    chebyshev_distance(target, center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(10);
        let bounds = Boundaries::compute(&grid);
        assert_eq!(bounds, Boundaries::Empty);
        assert_eq!(bounds.automaton_size(), 0);
        assert_eq!(bounds.center_of_mass(), None);
        assert_eq!(
            distance_to_target(&grid, &bounds, Point::new(8, 2)),
            chebyshev_distance(Point::new(8, 2), grid.center())
        );
    }

    #[test]
    fn test_single_cell() {
        let grid = Grid::from_cells(10, [(4, 7)]);
        let bounds = Boundaries::compute(&grid);
        assert_eq!(bounds.automaton_size(), 1);
        assert_eq!(bounds.center_of_mass(), Some(Point::new(7, 4)));
        assert_eq!(distance_to_target(&grid, &bounds, Point::new(1, 1)), 6);
    }

    #[test]
    fn test_box_independent_of_scan_order() {
        let cells = [(9, 2), (3, 3), (5, 8), (4, 1)];
        let mut reversed = cells;
        reversed.reverse();
        let a = Boundaries::compute(&Grid::from_cells(10, cells));
        let b = Boundaries::compute(&Grid::from_cells(10, reversed));
        assert_eq!(a, b);
        assert_eq!(
            a,
            Boundaries::Box {
                min_row: 3,
                max_row: 9,
                min_col: 1,
                max_col: 8
            }
        );
        assert_eq!(a.automaton_size(), 7 * 8);
        assert_eq!(a.center_of_mass(), Some(Point::new(4, 6)));
    }

    #[test]
    fn test_target_alive_means_zero_distance() {
        let grid = Grid::from_cells(10, [(2, 2), (9, 9)]);
        let bounds = Boundaries::compute(&grid);
        assert_eq!(distance_to_target(&grid, &bounds, Point::new(9, 9)), 0);
        assert_eq!(distance_to_target(&grid, &bounds, Point::new(9, 8)), 4);
    }

    #[test]
    fn test_distance_translation_invariant() {
        let cells = [(3, 4), (4, 5), (5, 3), (5, 4), (5, 5), (7, 2)];
        let target = Point::new(11, 2);
        let grid = Grid::from_cells(20, cells);
        let base = distance_to_target(&grid, &Boundaries::compute(&grid), target);
        for (dr, dc) in [(1, 0), (0, 3), (6, 5), (10, 1)] {
            let moved = Grid::from_cells(20, cells.iter().map(|&(r, c)| (r + dr, c + dc)));
            let moved_target = Point::new(target.x + dc, target.y + dr);
            let bounds = Boundaries::compute(&moved);
            assert_eq!(distance_to_target(&moved, &bounds, moved_target), base);
        }
    }

    #[test]
    fn test_distance_mirror_symmetric_for_odd_boxes() {
        let n = 20;
        let cells = [(3, 4), (4, 5), (5, 3), (5, 4), (5, 5)];
        let target = Point::new(15, 12);
        let grid = Grid::from_cells(n, cells);
        let base = distance_to_target(&grid, &Boundaries::compute(&grid), target);

        let mirror = |v: usize| n + 1 - v;
        let mirrored = Grid::from_cells(n, cells.iter().map(|&(r, c)| (mirror(r), mirror(c))));
        let mirrored_target = Point::new(mirror(target.x), mirror(target.y));
        let bounds = Boundaries::compute(&mirrored);
        assert_eq!(distance_to_target(&mirrored, &bounds, mirrored_target), base);
    }
}
