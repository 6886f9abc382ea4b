use crate::errors::*;
use smallvec::SmallVec;

/// Position of a cell on the grid.
///
/// `row` runs along the horizontal axis and `col` along the vertical axis, so moving across a
/// `Right` wall increases the row and moving across a `Bottom` wall increases the column.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    /// The coordinate one cell away across the given wall.
    /// Returns None if that would step below zero on either axis.
    pub fn offset(self, side: WallSide) -> Option<GridCoordinate> {
        let GridCoordinate { row, col } = self;
        match side {
            WallSide::Top => col.checked_sub(1).map(|col| GridCoordinate { row, col }),
            WallSide::Right => row.checked_add(1).map(|row| GridCoordinate { row, col }),
            WallSide::Bottom => col.checked_add(1).map(|col| GridCoordinate { row, col }),
            WallSide::Left => row.checked_sub(1).map(|row| GridCoordinate { row, col }),
        }
    }

    /// Which of our walls faces `other`, if `other` is orthogonally adjacent.
    pub fn side_towards(self, other: GridCoordinate) -> Option<WallSide> {
        let row_delta = self.row as isize - other.row as isize;
        let col_delta = self.col as isize - other.col as isize;
        match (row_delta, col_delta) {
            (1, 0) => Some(WallSide::Left),
            (-1, 0) => Some(WallSide::Right),
            (0, 1) => Some(WallSide::Top),
            (0, -1) => Some(WallSide::Bottom),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// The four walls of a cell. The discriminant is the index into `Cell::walls`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum WallSide {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl WallSide {
    /// Neighbour enumeration order used by the maze generator.
    pub const SEARCH_ORDER: [WallSide; 4] =
        [WallSide::Left, WallSide::Top, WallSide::Right, WallSide::Bottom];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> WallSide {
        match self {
            WallSide::Top => WallSide::Bottom,
            WallSide::Right => WallSide::Left,
            WallSide::Bottom => WallSide::Top,
            WallSide::Left => WallSide::Right,
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    coord: GridCoordinate,
    walls: [bool; 4], // top, right, bottom, left
    visited: bool,
}

impl Cell {
    /// A fully walled in, unvisited cell. The coordinates are not range checked.
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            coord: GridCoordinate::new(row, col),
            walls: [true; 4],
            visited: false,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> GridCoordinate {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.coord.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.coord.col
    }

    #[inline]
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    #[inline]
    pub fn has_wall(&self, side: WallSide) -> bool {
        self.walls[side.index()]
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// There is no way to unvisit a cell.
    #[inline]
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }
}

/// Carve a passage between two orthogonally adjacent cells by clearing the facing wall on each.
///
/// Returns the side of `a` that was opened. Calling this again on an already open pair is a
/// no-op that succeeds. Cells that are not adjacent are rejected with `InvalidAdjacency` and
/// neither cell is changed.
pub fn remove_walls(a: &mut Cell, b: &mut Cell) -> Result<WallSide> {
    let (a_coord, b_coord) = (a.coord, b.coord);
    let a_side = a_coord
        .side_towards(b_coord)
        .ok_or_else(|| ErrorKind::InvalidAdjacency(a_coord, b_coord))?;

    a.walls[a_side.index()] = false;
    b.walls[a_side.opposite().index()] = false;
    Ok(a_side)
}
