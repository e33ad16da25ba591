//! Grid error types.

use thiserror::Error;

/// Errors returned by grid operations.
///
/// A failing call never mutates the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Row or column count was zero or negative at construction.
    #[error("invalid grid dimensions: {rows}x{columns}")]
    InvalidDimension { rows: i32, columns: i32 },

    /// Dead-to-one-live ratio was zero or negative.
    #[error("invalid dead-to-one-live ratio: {0}")]
    InvalidArgument(i32),

    /// Coordinates fall outside the grid.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: i32,
        column: i32,
        rows: usize,
        columns: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
