//! Whole-grid repaints and single-cell edits.

use log::debug;
use rand::Rng;

use super::grid::checked_index;
use crate::error::{LifeError, Result};
use crate::state::Grid;

/// Kill every cell and reset the generation counter.
pub fn clear(grid: &mut Grid) {
    grid.cells.fill(false);
    grid.generation = 0;
    debug!("cleared {}x{} grid", grid.rows, grid.columns);
}

/// Repaint every cell: live with probability `1 / dead_to_one_live`.
///
/// Each cell draws from `[0, dead_to_one_live)` and is live only on 0, so
/// previously live cells that miss the draw die. A ratio below 1 is
/// rejected before any cell is touched.
pub fn randomize<R: Rng + ?Sized>(
    grid: &mut Grid,
    dead_to_one_live: i32,
    rng: &mut R,
) -> Result<()> {
    if dead_to_one_live <= 0 {
        return Err(LifeError::InvalidArgument(dead_to_one_live));
    }

    for cell in &mut grid.cells {
        *cell = rng.gen_range(0..dead_to_one_live) == 0;
    }
    grid.generation = 0;

    debug!(
        "randomized {}x{} grid at 1:{}",
        grid.rows, grid.columns, dead_to_one_live
    );
    Ok(())
}

/// Flip a single cell.
pub fn toggle(grid: &mut Grid, row: i32, column: i32) -> Result<()> {
    let idx = checked_index(grid, row, column)?;
    grid.cells[idx] = !grid.cells[idx];
    Ok(())
}

/// Read a single cell.
pub fn query(grid: &Grid, row: i32, column: i32) -> Result<bool> {
    let idx = checked_index(grid, row, column)?;
    Ok(grid.cells[idx])
}
