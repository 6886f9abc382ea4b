use crate::cells::{self, Cell, CoordinateSmallVec, GridCoordinate, WallSide};
use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

use error_chain::bail;
use itertools::iproduct;
use log::trace;
use petgraph::graph::{NodeIndex, UnGraph};
use std::mem;
use std::ops::Index;
use std::slice;

// Sides that lead away from the origin, so each passage is seen from one end only.
static FORWARD_SIDES: [WallSide; 2] = [WallSide::Right, WallSide::Bottom];

/// Number of cells in a `columns x rows` grid, or None if that is zero or the cells would not
/// fit in one allocation.
pub fn checked_cells_count(columns: ColumnsCount, rows: RowsCount) -> Option<usize> {
    let cell_bytes = mem::size_of::<Cell>();
    columns
        .0
        .checked_mul(rows.0)
        .filter(|&size| size > 0)
        .filter(|&size| {
            size.checked_mul(cell_bytes)
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
}

/// A fixed size rectangle of cells, stored row major.
///
/// Every grid owns its cells outright. Generating a new maze builds a new `Grid` rather than
/// resetting an old one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: ColumnsCount,
    rows: RowsCount,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `columns x rows` grid of enclosed, unvisited cells.
    ///
    /// Fails with `InvalidDimension` if either dimension is zero or the cells would need more
    /// than `isize::MAX` bytes.
    pub fn new(columns: ColumnsCount, rows: RowsCount) -> Result<Grid> {
        let (ColumnsCount(cols), RowsCount(row_count)) = (columns, rows);
        let size = checked_cells_count(columns, rows)
            .ok_or_else(|| ErrorKind::InvalidDimension(cols, row_count))?;

        let cells = iproduct!(0..row_count, 0..cols)
            .map(|(row, col)| Cell::new(row, col))
            .collect::<Vec<_>>();
        debug_assert_eq!(cells.len(), size);

        Ok(Grid {
            columns,
            rows,
            cells,
        })
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
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Where the player starts.
    #[inline]
    pub fn start(&self) -> GridCoordinate {
        GridCoordinate::new(0, 0)
    }

    /// The corner cell diagonally opposite the start.
    #[inline]
    pub fn goal(&self) -> GridCoordinate {
        GridCoordinate::new(self.rows.0 - 1, self.columns.0 - 1)
    }

    #[inline]
    pub fn is_goal(&self, coord: GridCoordinate) -> bool {
        coord == self.goal()
    }

    /// Is the grid coordinate within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.col)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.cell(coord).map_or(false, Cell::is_visited)
    }

    /// Marking an out of grid coordinate does nothing.
    pub fn mark_visited(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.cells[index].mark_visited();
        }
    }

    pub fn neighbour_at_side(&self, coord: GridCoordinate, side: WallSide) -> Option<GridCoordinate> {
        coord.offset(side).filter(|&neighbour| self.is_valid_coordinate(neighbour))
    }

    /// Cells to the left, top, right and bottom of a cell, in that order, but not necessarily
    /// linked by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        WallSide::SEARCH_ORDER
            .iter()
            .filter_map(|&side| self.neighbour_at_side(coord, side))
            .collect()
    }

    /// The subset of `neighbours` that the maze carving has not reached yet.
    pub fn unvisited_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        WallSide::SEARCH_ORDER
            .iter()
            .filter_map(|&side| self.neighbour_at_side(coord, side))
            .filter(|&neighbour| !self.is_visited(neighbour))
            .collect()
    }

    /// Remove the wall pair between two adjacent cells of this grid.
    pub fn carve(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        let a_index = self
            .grid_coordinate_to_index(a)
            .ok_or_else(|| ErrorKind::InvalidCoordinate(a))?;
        let b_index = self
            .grid_coordinate_to_index(b)
            .ok_or_else(|| ErrorKind::InvalidCoordinate(b))?;
        if a_index == b_index {
            bail!(ErrorKind::InvalidAdjacency(a, b));
        }

        let (a_cell, b_cell) = self.cell_pair_mut(a_index, b_index);
        let side = cells::remove_walls(a_cell, b_cell)?;
        trace!("carved {:?} -> {:?} through the {:?} wall", a, b, side);
        Ok(())
    }

    /// Movement validator: legal iff the wall on `side` is down and the destination is on the
    /// grid.
    pub fn can_move(&self, coord: GridCoordinate, side: WallSide) -> bool {
        self.move_from(coord, side).is_some()
    }

    pub fn move_from(&self, coord: GridCoordinate, side: WallSide) -> Option<GridCoordinate> {
        let cell = self.cell(coord)?;
        if cell.has_wall(side) {
            None
        } else {
            self.neighbour_at_side(coord, side)
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn coordinates<'a>(&'a self) -> impl Iterator<Item = GridCoordinate> + 'a {
        self.cells.iter().map(Cell::coordinate)
    }

    /// Every carved passage, each reported once as (cell, cell to its right or bottom).
    pub fn passages<'a>(&'a self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + 'a {
        self.coordinates().flat_map(move |coord| {
            FORWARD_SIDES
                .iter()
                .filter_map(move |&side| self.move_from(coord, side))
                .map(move |neighbour| (coord, neighbour))
        })
    }

    pub fn passages_count(&self) -> usize {
        self.passages().count()
    }

    /// The maze as an undirected graph: node `i` is the cell at row major index `i` and there is
    /// one edge per passage.
    pub fn passage_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let mut graph = UnGraph::with_capacity(self.size(), self.size());
        for coord in self.coordinates() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.passages() {
            if let (Some(a_index), Some(b_index)) = (self.grid_coordinate_to_index(a),
                                                     self.grid_coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    fn cell_pair_mut(&mut self, a: usize, b: usize) -> (&mut Cell, &mut Cell) {
        debug_assert!(a != b);
        if a < b {
            let (low, high) = self.cells.split_at_mut(b);
            (&mut low[a], &mut high[0])
        } else {
            let (low, high) = self.cells.split_at_mut(a);
            (&mut high[0], &mut low[b])
        }
    }
}

impl Index<GridCoordinate> for Grid {
    type Output = Cell;

    /// Panics if the coordinate is outside the grid; `cell` is the checked version.
    fn index(&self, coord: GridCoordinate) -> &Cell {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => &self.cells[index],
            None => panic!("coordinate {:?} is outside the grid", coord),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
