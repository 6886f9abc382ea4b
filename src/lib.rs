//! **amazeing** generates perfect mazes with randomized depth first backtracking and lets a
//! player walk them from corner to corner, with a new maze after every win.

pub mod cells;
pub mod config;
pub mod errors;
pub mod game;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod units;
