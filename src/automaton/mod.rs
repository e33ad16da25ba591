//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for building the toroidal grid,
//! stepping it, and editing cells. `Grid`'s methods, the shared wrapper,
//! and the FFI layer in `ffi/` all call these functions.

pub mod editing;
pub mod grid;
pub mod stepping;

pub use editing::{clear, query, randomize, toggle};
pub use grid::{checked_index, count_neighbors, create_grid, in_bounds, index_of};
pub use stepping::step_grid;
