use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

use log::debug;
use rand::Rng;
use rand::rngs::OsRng;

/// Source of the random choices made while carving a maze.
pub trait NeighbourSelector {
    /// Choose uniformly an index in `0..candidates_count`. `candidates_count` is never zero.
    fn select(&mut self, candidates_count: usize) -> usize;
}

/// Adapts any `rand` generator into a `NeighbourSelector`.
#[derive(Debug, Clone)]
pub struct RngSelector<R: Rng>(pub R);

impl<R: Rng> NeighbourSelector for RngSelector<R> {
    #[inline]
    fn select(&mut self, candidates_count: usize) -> usize {
        self.0.gen_range(0..candidates_count)
    }
}

/// Selector drawing from the operating system's cryptographically secure source.
///
/// A weakly seeded generator gives visibly repeating mazes, every generation wants fresh entropy.
/// If the OS source is unavailable `rand` panics; there is no fallback that keeps the choices
/// uniform.
pub fn os_selector() -> RngSelector<OsRng> {
    RngSelector(OsRng)
}

/// Generate a `columns x rows` maze with randomized depth first backtracking.
pub fn generate_maze(columns: ColumnsCount, rows: RowsCount) -> Result<Grid> {
    generate_maze_with(columns, rows, &mut os_selector())
}

/// Apply the recursive backtracker algorithm to a fresh grid, taking random choices from
/// `selector`.
///
/// Starting at (0, 0) the walk carves into a random unvisited neighbour, pushing the cell it
/// left onto a stack. At a dead end it pops back along the stack until some cell has an
/// unvisited neighbour again. Walls only come down when entering a cell for the first time, so
/// the result is a perfect maze: a spanning tree of the grid with `size - 1` passages.
pub fn generate_maze_with<S>(columns: ColumnsCount,
                             rows: RowsCount,
                             selector: &mut S)
                             -> Result<Grid>
    where S: NeighbourSelector + ?Sized
{
    let mut grid = Grid::new(columns, rows)?;

    // Coordinates index back into `grid`, the stack owns no cells.
    let mut trail: Vec<GridCoordinate> = Vec::with_capacity(grid.size());
    let mut current = grid.start();
    let mut carved = 0;

    loop {
        let neighbours = grid.unvisited_neighbours(current);

        if !neighbours.is_empty() {
            let choice = selector.select(neighbours.len());
            debug_assert!(choice < neighbours.len(), "selector chose out of range");
            let next = neighbours[choice];

            trail.push(current);
            grid.carve(current, next)?;
            carved += 1;
            grid.mark_visited(current);
            current = next;
        } else if let Some(previous) = trail.pop() {
            grid.mark_visited(current);
            current = previous;
        } else {
            break;
        }
    }

    // Only reached with the walk back at the start; this also covers a lone 1x1 cell.
    grid.mark_visited(current);

    debug!("generated {}x{} maze with {} passages",
           columns.0,
           rows.0,
           carved);
    Ok(grid)
}
