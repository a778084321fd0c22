use std::fmt;

use thiserror::Error;

use crate::cell::Cell;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one row and one column")]
    Empty,

    #[error("Row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCellValue { row: usize, col: usize, value: u8 },
}

/// One generation of the board.
///
/// Dimensions are fixed at construction. Cells are stored row-major in a
/// single flat buffer, so no two rows can alias the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be nonzero");

        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid from external 0/1 row data.
    ///
    /// Fails fast on ragged rows or non-binary values; a malformed automaton
    /// state has no meaningful partial result.
    pub fn from_rows(data: &[Vec<u8>]) -> Result<Self, GridError> {
        let rows = data.len();
        let cols = data.first().map(Vec::len).unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);

        for (row, values) in data.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRows {
                    row,
                    len: values.len(),
                    expected: cols,
                });
            }

            for (col, &value) in values.iter().enumerate() {
                let Some(cell) = Cell::from_bit(value) else {
                    return Err(GridError::InvalidCellValue { row, col, value });
                };

                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let i = self.index(row, col);
            self.cells[i] = cell;
        }
    }

    /// Flip a single cell. Out-of-range coordinates are ignored, pointer
    /// events routinely land outside the board.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            let i = self.index(row, col);
            self.cells[i] = self.cells[i].toggled();
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate cells in row-major order with their coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.cols, i % self.cols, cell))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl fmt::Display for Grid {
    /// One character per cell, `o` alive and `.` dead, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_str("\n")?;
            }

            for col in 0..self.cols {
                let glyph = if self.cells[self.index(row, col)].is_alive() {
                    "o"
                } else {
                    "."
                };

                f.write_str(glyph)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use super::GridError;
    use crate::cell::Cell;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(3, 4);

        assert_eq!(grid.population(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    }

    #[test]
    fn toggle_flips_and_ignores_out_of_range() {
        let mut grid = Grid::new(2, 2);

        grid.toggle(0, 1);
        assert_eq!(grid.get(0, 1), Some(Cell::Alive));

        grid.toggle(0, 1);
        assert_eq!(grid.get(0, 1), Some(Cell::Dead));

        grid.toggle(5, 5);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn from_rows_accepts_binary_rectangles() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![1, 0, 1]]).unwrap();

        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let res = Grid::from_rows(&[vec![0, 1], vec![1]]);

        assert_eq!(
            res.unwrap_err(),
            GridError::RaggedRows {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_non_binary_values() {
        let res = Grid::from_rows(&[vec![0, 2]]);

        assert_eq!(
            res.unwrap_err(),
            GridError::InvalidCellValue {
                row: 0,
                col: 1,
                value: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert_eq!(Grid::from_rows(&[]).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::from_rows(&[vec![]]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn display_uses_dots_and_os() {
        let mut grid = Grid::new(2, 3);
        grid.toggle(0, 0);
        grid.toggle(1, 2);

        assert_eq!(grid.to_string(), "o..\n..o");
    }
}
