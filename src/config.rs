use crate::Coordinate;
use crate::ScreenSize;
use crate::grid::Grid;
use crate::grid::GridResult;

/// Everything a session needs, spelled out.
///
/// Every field is required. Dimensions and cell sizing were free-form
/// keyword maps in earlier renditions of this toy; here they are explicit so
/// a missing value is a compile error, not a hidden default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Field width, in cells
    pub width: usize,

    /// Field height, in cells
    pub height: usize,

    /// Cells alive at generation zero
    pub initial_alive: Vec<Coordinate>,

    /// Terminal columns covered by one cell
    pub cell_cols: ScreenSize,

    /// Terminal rows covered by one cell
    pub cell_rows: ScreenSize,
}

impl Config {
    /// Build the generation-zero grid described by this configuration.
    pub fn build_grid(&self) -> GridResult<Grid> {
        Grid::new(self.width, self.height, self.initial_alive.iter().copied())
    }
}
