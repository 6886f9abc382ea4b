use crate::errors::*;
use crate::grid;
use crate::units::{ColumnsCount, RowsCount};

use error_chain::bail;

pub const DEFAULT_CELLS: usize = 10;
pub const DEFAULT_CELL_WIDTH: usize = 3;

/// Everything the generator and the text front end need to know about the maze shape.
///
/// Passed explicitly to whoever needs it, there is no process wide setting.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    columns: ColumnsCount,
    rows: RowsCount,
    cell_width: usize,
}

impl MazeConfig {
    /// Rejects the same dimensions `Grid::new` would, so a valid config always yields a grid.
    pub fn new(columns: ColumnsCount, rows: RowsCount) -> Result<MazeConfig> {
        if grid::checked_cells_count(columns, rows).is_none() {
            bail!(ErrorKind::InvalidDimension(columns.0, rows.0));
        }
        Ok(MazeConfig {
            columns,
            rows,
            cell_width: DEFAULT_CELL_WIDTH,
        })
    }

    /// Glyphs per cell body in the text rendering, at least 1.
    pub fn with_cell_width(self, cell_width: usize) -> MazeConfig {
        MazeConfig { cell_width: cell_width.max(1), ..self }
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            columns: ColumnsCount(DEFAULT_CELLS),
            rows: RowsCount(DEFAULT_CELLS),
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}
