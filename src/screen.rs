use crate::Coordinate;
use crate::ScreenSize;
use crate::config::Config;
use crate::grid::Grid;

/// What an alive cell looks like on screen
const ALIVE: char = '█';

/// What a dead cell looks like on screen
const DEAD: char = '·';

/// Renders a [`Grid`] into a text frame, one `cell_cols` x `cell_rows` block
/// of characters per cell.
///
/// Fundamentally we keep a cell buffer of every cell on the field and ask
/// "is this cell on or off?", then expand each answer into its block of
/// characters. Both buffers are reused across frames.
pub struct Screen {
    /// The cell buffer, row-major
    cb: Vec<bool>,

    /// The frame buffer
    fb: String,

    /// Width of the field, in cells
    w: usize,

    /// Height of the field, in cells
    h: usize,

    /// Terminal columns per cell
    cell_cols: usize,

    /// Terminal rows per cell
    cell_rows: usize,
}

impl Screen {
    pub fn new(config: &Config) -> Self {
        assert!(config.cell_cols > 0, "cells must be at least one column wide");
        assert!(config.cell_rows > 0, "cells must be at least one row tall");

        let w = config.width;
        let h = config.height;

        let cell_cols = config.cell_cols as usize;
        let cell_rows = config.cell_rows as usize;

        let cb = vec![false; w * h];

        // `ALIVE` and `DEAD` are at most 3 bytes each in UTF-8, and every
        // frame line of `w * cell_cols` characters ends in one newline byte.
        // The frame has `h * cell_rows` such lines.
        let line_len = 3 * (w * cell_cols) + 1;
        let fb = String::with_capacity(line_len * h * cell_rows);

        Self {
            cb,
            fb,
            w,
            h,
            cell_cols,
            cell_rows,
        }
    }

    /// Copy the grid's current generation into the cell buffer.
    pub fn draw(&mut self, grid: &Grid) {
        debug_assert_eq!(grid.width(), self.w);
        debug_assert_eq!(grid.height(), self.h);

        for y in 0..self.h {
            for x in 0..self.w {
                self.cb[y * self.w + x] = grid.get(x, y);
            }
        }
    }

    /// Produce the finished frame for the last-drawn generation.
    pub fn render(&mut self) -> &str {
        self.fb.clear();

        for y in 0..self.h {
            for _ in 0..self.cell_rows {
                for x in 0..self.w {
                    let c = if self.cb[y * self.w + x] { ALIVE } else { DEAD };

                    for _ in 0..self.cell_cols {
                        self.fb.push(c);
                    }
                }

                self.fb.push('\n');
            }
        }

        &self.fb
    }

    /// The cell whose block covers the terminal position `(col, row)`, if
    /// any. This is how a pointer click becomes a grid coordinate.
    pub fn hit(&self, col: ScreenSize, row: ScreenSize) -> Option<Coordinate> {
        let x = col as usize / self.cell_cols;
        let y = row as usize / self.cell_rows;

        (x < self.w && y < self.h).then_some((x, y))
    }
}
