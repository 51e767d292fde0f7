use crate::grid::Grid;

/// Applies the Game of Life transition to a bordered [`Grid`].
///
/// Next states are always computed from a snapshot of the current
/// generation, so the result does not depend on traversal order. The
/// snapshot buffer is kept between calls.
#[derive(Default)]
pub struct LifeEngine {
    snapshot: Vec<bool>,
}

impl LifeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn count_neibs(cells: &[bool], side: usize, row: usize, col: usize) -> usize {
        let (up, mid, down) = ((row - 1) * side, row * side, (row + 1) * side);
        cells[up + col - 1] as usize
            + cells[up + col] as usize
            + cells[up + col + 1] as usize
            + cells[mid + col - 1] as usize
            + cells[mid + col + 1] as usize
            + cells[down + col - 1] as usize
            + cells[down + col] as usize
            + cells[down + col + 1] as usize
    }

    /// Advances `grid` by one generation in place.
    ///
    /// The border is forced dead first, so neighbours outside the interior
    /// always count as dead.
    ///
    /// Returns the number of live cells after the update.
    pub fn advance(&mut self, grid: &mut Grid) -> usize {
        grid.clear_border();

        self.snapshot.clear();
        self.snapshot.extend_from_slice(grid.cells());

        let side = grid.side();
        let interior = grid.interior();
        let cells = grid.cells_mut();
        let mut alive = 0;
        for row in interior.clone() {
            for col in interior.clone() {
                let idx = row * side + col;
                let neibs = Self::count_neibs(&self.snapshot, side, row, col);
                let next = if self.snapshot[idx] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                cells[idx] = next;
                alive += next as usize;
            }
        }
        alive
    }
}
