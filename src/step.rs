//! The generation stepper.

use tracing::trace;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::rules;

/// The 8 Moore-neighborhood offsets as (row, col) deltas.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Grid {
    /// Compute the next generation.
    ///
    /// Reads only `self` and returns a brand-new grid of identical
    /// dimensions; callers keep their old snapshot untouched. Offsets that
    /// fall outside the board contribute nothing, the board does not wrap.
    pub fn step(&self) -> Grid {
        let mut next = Grid::new(self.rows(), self.cols());

        for (row, col, cell) in self.iter_cells() {
            let neighbors = self.live_neighbors(row, col);

            if rules::next_state(cell.is_alive(), neighbors) {
                next.set(row, col, Cell::Alive);
            }
        }

        trace!(population = next.population(), "stepped one generation");

        next
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let Some(r) = row.checked_add_signed(dr) else {
                continue;
            };
            let Some(c) = col.checked_add_signed(dc) else {
                continue;
            };

            if let Some(cell) = self.get(r, c) {
                count += cell.as_bit();
            }
        }

        count
    }
}
