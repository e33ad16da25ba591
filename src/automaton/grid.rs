//! Grid initialization, toroidal neighbor tables, and cell access helpers.

use crate::error::{LifeError, Result};
use crate::state::Grid;

/// Row/column offsets of the Moore neighborhood (8 neighbors).
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// Allocate an all-dead grid and precompute every cell's neighbor table.
pub fn create_grid(rows: i32, columns: i32) -> Result<Grid> {
    let invalid = LifeError::InvalidDimension { rows, columns };
    if rows <= 0 || columns <= 0 {
        return Err(invalid);
    }

    let rows = rows as usize;
    let columns = columns as usize;
    let size = rows.checked_mul(columns).ok_or(invalid)?;

    Ok(Grid {
        rows,
        columns,
        cells: vec![false; size],
        neighbors: build_neighbor_table(rows, columns),
        pending: Vec::new(),
        generation: 0,
    })
}

/// Wrap a coordinate that is at most one step outside `[0, extent)`.
///
/// `-1` maps to `extent - 1` and `extent` maps to `0`. With `extent == 1`
/// both directions land back on `0`.
#[inline]
pub fn wrap(coord: isize, extent: usize) -> usize {
    coord.rem_euclid(extent as isize) as usize
}

/// Calculate the linear index for a row/column pair.
#[inline]
pub fn index_of(grid: &Grid, row: usize, column: usize) -> usize {
    row * grid.columns + column
}

/// Inverse of [`index_of`].
#[inline]
pub fn coords_of(grid: &Grid, index: usize) -> (usize, usize) {
    (index / grid.columns, index % grid.columns)
}

/// Check if signed coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, row: i32, column: i32) -> bool {
    row >= 0 && (row as usize) < grid.rows && column >= 0 && (column as usize) < grid.columns
}

/// Resolve signed coordinates to a linear index, or fail with `OutOfBounds`.
pub fn checked_index(grid: &Grid, row: i32, column: i32) -> Result<usize> {
    if !in_bounds(grid, row, column) {
        return Err(LifeError::OutOfBounds {
            row,
            column,
            rows: grid.rows,
            columns: grid.columns,
        });
    }
    Ok(index_of(grid, row as usize, column as usize))
}

/// Linear indices of the 8 wrapped neighbors of `(row, column)`.
///
/// Duplicates are kept: on a one-row or one-column grid a cell can appear
/// in its own list, and the same neighbor can appear more than once.
pub fn neighbor_indices(rows: usize, columns: usize, row: usize, column: usize) -> [usize; 8] {
    let mut out = [0; 8];
    for (slot, &(dr, dc)) in out.iter_mut().zip(NEIGHBOR_OFFSETS.iter()) {
        let r = wrap(row as isize + dr, rows);
        let c = wrap(column as isize + dc, columns);
        *slot = r * columns + c;
    }
    out
}

/// Build the neighbor table for every cell in row-major order.
pub fn build_neighbor_table(rows: usize, columns: usize) -> Vec<[usize; 8]> {
    let mut table = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            table.push(neighbor_indices(rows, columns, row, column));
        }
    }
    table
}

/// Count live neighbors of the cell at `index`, duplicates included.
#[inline]
pub fn count_neighbors(grid: &Grid, index: usize) -> u8 {
    grid.neighbors[index]
        .iter()
        .filter(|&&n| grid.cells[n])
        .count() as u8
}
