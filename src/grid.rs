use std::fmt;

/// A cell position in backing-array coordinates: `x` is the column,
/// `y` is the row. The interior spans `1..=n` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Square field of `n x n` live/dead cells padded with a dead border.
///
/// Cells are stored row-major in a flat `(n + 2) x (n + 2)` array and are
/// addressed as `(row, col)` in that backing array. Border cells never
/// become alive: [`Grid::set`] ignores them and [`Grid::clear_border`]
/// resets them before every update.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    n: usize,
}

impl Grid {
    pub const DEFAULT_SIZE: usize = 40;
    pub const BORDER: usize = 1;

    /// Creates a grid with a dead `n x n` interior.
    pub fn new(n: usize) -> Self {
        assert!(n >= 1, "grid interior must hold at least one cell");
        let side = n + 2 * Self::BORDER;
        Self {
            cells: vec![false; side * side],
            n,
        }
    }

    /// Parses textual rows of `'0'`/`'1'` into the interior.
    ///
    /// Only the first `n` rows and the first `n` characters of each row are
    /// consumed. Any character other than `'1'` is dead, and missing
    /// characters or rows stay dead. Parsing never fails.
    pub fn from_rows<I, S>(n: usize, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Self::new(n);
        let mut rows_read = 0;
        let mut short_rows = 0;
        for (i, line) in rows.into_iter().take(n).enumerate() {
            let line = line.as_ref().as_bytes();
            if line.len() < n {
                short_rows += 1;
            }
            for (j, &c) in line.iter().take(n).enumerate() {
                grid.set(i + Self::BORDER, j + Self::BORDER, c == b'1');
            }
            rows_read += 1;
        }
        if rows_read < n || short_rows > 0 {
            log::warn!(
                "grid input is incomplete ({} of {} rows, {} short rows); missing cells are dead",
                rows_read,
                n,
                short_rows
            );
        }
        grid
    }

    /// Builds a grid with the given `(row, col)` cells alive.
    ///
    /// Positions outside the interior are skipped.
    pub fn from_cells<I>(n: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(n);
        for (row, col) in cells {
            if grid.is_interior(row, col) {
                grid.set(row, col, true);
            }
        }
        grid
    }

    /// Fills the interior with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(n: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut grid = Self::new(n);
        for row in grid.interior() {
            for col in grid.interior() {
                grid.set(row, col, rng.gen_bool(fill_rate));
            }
        }
        grid
    }

    /// Effective (interior) side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Side length of the backing array, border included.
    pub fn side(&self) -> usize {
        self.n + 2 * Self::BORDER
    }

    /// Row/column indices of the interior.
    pub fn interior(&self) -> std::ops::RangeInclusive<usize> {
        Self::BORDER..=self.n
    }

    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        self.interior().contains(&row) && self.interior().contains(&col)
    }

    /// Center of the interior, used as the reference point of an empty automaton.
    pub fn center(&self) -> Point {
        let c = (Self::BORDER + self.n) / 2;
        Point::new(c, c)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        let side = self.side();
        assert!(
            row < side && col < side,
            "cell ({}, {}) is outside the {}x{} backing array",
            row,
            col,
            side,
            side
        );
        row * side + col
    }

    /// State of a cell; panics when `(row, col)` is outside the backing array.
    pub fn cell_at(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn is_alive(&self, p: Point) -> bool {
        self.cell_at(p.y, p.x)
    }

    /// Sets an interior cell. Writes to the border are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        if self.is_interior(row, col) {
            self.cells[idx] = alive;
        }
    }

    /// Forces every border cell dead.
    pub fn clear_border(&mut self) {
        let side = self.side();
        let last = side - 1;
        for i in 0..side {
            self.cells[i] = false;
            self.cells[last * side + i] = false;
            self.cells[i * side] = false;
            self.cells[i * side + last] = false;
        }
    }

    pub fn border_is_dead(&self) -> bool {
        let side = self.side();
        (0..side).all(|i| {
            !self.cell_at(0, i)
                && !self.cell_at(side - 1, i)
                && !self.cell_at(i, 0)
                && !self.cell_at(i, side - 1)
        })
    }

    /// Copies the interior of `other` into `self`.
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(self.n, other.n, "grids of different sizes");
        let side = self.side();
        for row in self.interior() {
            let range = row * side + Self::BORDER..row * side + self.n + Self::BORDER;
            self.cells[range.clone()].copy_from_slice(&other.cells[range]);
        }
    }

    pub fn live_count(&self) -> usize {
        self.interior_rows()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }

    /// Interior rows, top to bottom, without the border columns.
    pub fn interior_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let side = self.side();
        self.interior()
            .map(move |row| &self.cells[row * side + Self::BORDER..row * side + self.n + Self::BORDER])
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

/// Grids are equal when their interiors match; the border is dead by construction.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.interior_rows().eq(other.interior_rows())
    }
}

impl Eq for Grid {}

/// Writes the interior in the same `'0'`/`'1'` row format [`Grid::from_rows`] reads.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.interior_rows() {
            for &c in row {
                write!(f, "{}", c as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_fills_interior_only() {
        let grid = Grid::from_rows(3, ["100", "010", "001"]);
        assert!(grid.cell_at(1, 1));
        assert!(grid.cell_at(2, 2));
        assert!(grid.cell_at(3, 3));
        assert!(!grid.cell_at(1, 2));
        assert_eq!(grid.live_count(), 3);
        assert!(grid.border_is_dead());
    }

    #[test]
    fn test_from_rows_tolerates_garbage() {
        let grid = Grid::from_rows(4, ["11", "1x1?11111", ""]);
        assert_eq!(grid.live_count(), 4);
        assert!(grid.cell_at(2, 1));
        assert!(!grid.cell_at(2, 2));
        assert!(grid.cell_at(2, 3));
        assert!(!grid.cell_at(2, 4));
        assert!(grid.border_is_dead());
    }

    #[test]
    fn test_display_roundtrip() {
        let grid = Grid::random(12, Some(7), 0.4);
        let text = grid.to_string();
        assert_eq!(Grid::from_rows(12, text.lines()), grid);
    }

    #[test]
    fn test_set_ignores_border() {
        let mut grid = Grid::new(5);
        grid.set(0, 3, true);
        grid.set(6, 6, true);
        grid.set(3, 0, true);
        assert!(grid.border_is_dead());
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_cell_at_outside_backing_array() {
        Grid::new(5).cell_at(7, 1);
    }

    #[test]
    fn test_equality_and_copy() {
        let a = Grid::random(10, Some(1), 0.5);
        let mut b = Grid::new(10);
        assert_ne!(a, b);
        b.copy_from(&a);
        assert_eq!(a, b);
        b.set(4, 4, !b.cell_at(4, 4));
        assert_ne!(a, b);
    }

    #[test]
    fn test_clear_border() {
        let mut grid = Grid::random(6, Some(3), 0.9);
        let side = grid.side();
        grid.cells_mut()[0] = true;
        grid.cells_mut()[side * side - 1] = true;
        grid.cells_mut()[3 * side] = true;
        assert!(!grid.border_is_dead());
        let live = grid.live_count();
        grid.clear_border();
        assert!(grid.border_is_dead());
        assert_eq!(grid.live_count(), live);
    }

    #[test]
    fn test_from_cells_skips_outside() {
        let grid = Grid::from_cells(5, [(1, 1), (0, 2), (5, 5), (6, 1), (3, 9)]);
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(40).center(), Point::new(20, 20));
        assert_eq!(Grid::new(5).center(), Point::new(3, 3));
    }
}
