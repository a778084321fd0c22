use crate::grid::Grid;

/// Glyphs for one cell, two terminal columns each so a cell reads roughly
/// square on screen and every cell is individually clickable.
const ALIVE_GLYPH: &str = "██";
const DEAD_GLYPH: &str = "· ";

pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Width of the cell buffer, in cells
    w: usize,

    /// Height of the cell buffer, in cells
    h: usize,
}

impl Camera {
    /// Create a camera sized for a `w x h` cell board.
    pub fn new(w: usize, h: usize) -> Self {
        let cb = vec![false; w * h];

        // A live glyph is 3 bytes of UTF-8 per column, so one row takes at
        // most `3 * 2 * w` bytes plus its newline.
        let fb = String::with_capacity((3 * 2 * w + 1) * h);

        Self { cb, fb, w, h }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Turns on a single cell of the framebuffer
    pub fn draw_cell(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Copy a grid snapshot into the cell buffer.
    pub fn draw(&mut self, grid: &Grid) {
        assert!(
            grid.cols() == self.w && grid.rows() == self.h,
            "camera does not fit the grid"
        );

        for (row, col, cell) in grid.iter_cells() {
            if cell.is_alive() {
                self.draw_cell(col, row);
            }
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Rebuild the framebuffer from the cell buffer, one line per board
    /// row, and return it.
    pub fn render(&mut self) -> &str {
        self.fb.clear();

        for (n, &on) in self.cb.iter().enumerate() {
            if n > 0 && n % self.w == 0 {
                self.fb.push('\n');
            }

            self.fb.push_str(if on { ALIVE_GLYPH } else { DEAD_GLYPH });
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
}

#[cfg(test)]
mod tests {
    use super::Camera;
    use crate::grid::Grid;

    #[test]
    fn render_marks_live_cells() {
        let mut grid = Grid::new(2, 2);
        grid.toggle(0, 0);

        let mut cam = Camera::new(2, 2);
        cam.draw(&grid);

        assert_eq!(cam.render(), "██· \n· · \n");
    }

    #[test]
    fn reset_clears_the_previous_frame() {
        let mut cam = Camera::new(2, 1);
        cam.draw_cell(1, 0);
        cam.reset();

        assert_eq!(cam.render(), "· · \n");
    }
}
