use crate::grid::Grid;

/// A small named configuration, cells given as `(row, col)` offsets.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Places the pattern with its top-left offset at `(row, col)`.
    ///
    /// Cells that fall outside the interior are dropped.
    pub fn place(&self, n: usize, row: usize, col: usize) -> Grid {
        Grid::from_cells(n, self.cells.iter().map(|&(r, c)| (row + r, col + c)))
    }

    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

pub const DOT: Pattern = Pattern {
    name: "dot",
    cells: &[(0, 0)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Travels one cell down and one cell right every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const PATTERNS: &[Pattern] = &[DOT, BLOCK, BLINKER, GLIDER, R_PENTOMINO];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LifeEngine;

    #[test]
    fn test_glider_translates() {
        let mut grid = GLIDER.place(20, 2, 2);
        let mut engine = LifeEngine::new();
        for _ in 0..4 {
            engine.advance(&mut grid);
        }
        assert_eq!(grid, GLIDER.place(20, 3, 3));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Pattern::by_name("Glider").map(|p| p.cells.len()), Some(5));
        assert!(Pattern::by_name("gun").is_none());
    }
}
