// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use errors::*;` to get access to everything `error_chain!` creates.
#![allow(deprecated)]

use crate::cells::GridCoordinate;
use error_chain::error_chain;

error_chain! {
    errors {
        InvalidDimension(columns: usize, rows: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {} columns x {} rows", columns, rows)
        }
        InvalidAdjacency(a: GridCoordinate, b: GridCoordinate) {
            description("cells are not orthogonally adjacent")
            display("cells {:?} and {:?} are not orthogonally adjacent", a, b)
        }
        InvalidCoordinate(coord: GridCoordinate) {
            description("coordinate is outside the grid")
            display("coordinate {:?} is outside the grid", coord)
        }
    }
}
