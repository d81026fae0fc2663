//! Core engine for the Sun Vale color puzzle.
//!
//! The puzzle is a row of slots, each holding one of eight colors valued
//! 1 through 8. Placing a color on a slot adds its value to the slot with
//! an odometer-style wrap at 8, and an overflow carries one unit into the
//! slot to the left. The solver searches greedily, right to left, for
//! placements that leave the leftmost slot showing the target color.
//!
//! This crate is pure: no I/O, no randomness, no global state. The
//! interactive frontend lives in `sunvale-tui`.

mod board;
mod color;
mod inventory;
mod solver;

pub use board::Board;
pub use color::Color;
pub use inventory::{Inventory, DEFAULT_SUPPLY};
pub use solver::{find_solution, Placement};
