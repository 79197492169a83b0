use thiserror::Error;

use crate::Coordinate;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Field dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("({x}, {y}) is outside the {width}x{height} field")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A finite field of cells, each alive or dead.
///
/// Dimensions are fixed at construction. Every coordinate in
/// `[0, width) x [0, height)` has exactly one state at all times; the field
/// has a hard edge, so there is no cell and no neighbor beyond it.
///
/// Out-of-range coordinates are a caller error and come back as
/// [`GridError::OutOfBounds`]. They are never clamped or wrapped, since
/// either would silently corrupt the simulation.
pub struct Grid {
    /// Cell states, row-major: `(x, y)` lives at `y * w + x`
    cells: Vec<bool>,

    /// Width of the field
    w: usize,

    /// Height of the field
    h: usize,
}

impl Grid {
    /// Create a field with every cell dead except those in `alive`.
    pub fn new<I>(width: usize, height: usize, alive: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let mut grid = Self {
            cells: vec![false; width * height],
            w: width,
            h: height,
        };

        grid.spawn_all(alive)?;

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn is_alive(&self, x: usize, y: usize) -> GridResult<bool> {
        self.check(x, y)?;

        Ok(self.cells[self.index(x, y)])
    }

    /// Mark a cell alive. Spawning an already-alive cell is a no-op.
    pub fn spawn(&mut self, x: usize, y: usize) -> GridResult<()> {
        self.check(x, y)?;

        let i = self.index(x, y);
        self.cells[i] = true;

        Ok(())
    }

    /// Like [`Grid::spawn`], for many cells at once.
    pub fn spawn_all<I>(&mut self, coords: I) -> GridResult<()>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        for (x, y) in coords {
            self.spawn(x, y)?;
        }

        Ok(())
    }

    /// Mark a cell dead. Killing an already-dead cell is a no-op.
    pub fn kill(&mut self, x: usize, y: usize) -> GridResult<()> {
        self.check(x, y)?;

        let i = self.index(x, y);
        self.cells[i] = false;

        Ok(())
    }

    /// Count the alive cells among the up-to-eight neighbors of `(x, y)`.
    ///
    /// Neighbor positions beyond the field edge simply don't exist: an edge
    /// cell sees 5 candidate positions, a corner cell 3.
    pub fn living_neighbors(&self, x: usize, y: usize) -> GridResult<u8> {
        self.check(x, y)?;

        Ok(self.count_neighbors(x, y))
    }

    /// [`Grid::living_neighbors`] without the bounds check, for traversals
    /// whose coordinates are in range by construction.
    pub(crate) fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        // Clamp the 3x3 neighborhood to the field
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(self.w - 1);
        let y1 = (y + 1).min(self.h - 1);

        let mut n = 0;

        for ny in y0..=y1 {
            for nx in x0..=x1 {
                if (nx, ny) != (x, y) && self.cells[self.index(nx, ny)] {
                    n += 1;
                }
            }
        }

        n
    }

    pub(crate) fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, state: bool) {
        let i = self.index(x, y);
        self.cells[i] = state;
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn check(&self, x: usize, y: usize) -> GridResult<()> {
        if x < self.w && y < self.h {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.w,
                height: self.h,
            })
        }
    }
}
