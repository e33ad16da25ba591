//! Toroidal Life - Conway's Game of Life on an edge-wrapping grid
//!
//! The engine owns cell state and advances it one generation at a time.
//! Drawing, input, and timers belong to the host: it reads cells back after
//! each operation and forwards edits and commands in. Rust hosts use
//! [`Grid`], [`Session`], or [`SharedGrid`]; other hosts use the C ABI in
//! [`ffi`].
//!
//! ```
//! use toroidal_life::Grid;
//!
//! let mut grid = Grid::new(5, 5, false, 1)?;
//! for column in 1..4 {
//!     grid.toggle(2, column)?;
//! }
//! grid.step();
//! assert!(grid.is_alive(1, 2)?);
//! # Ok::<(), toroidal_life::LifeError>(())
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod session;
pub mod shared;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use session::Session;
pub use shared::SharedGrid;
pub use state::Grid;
