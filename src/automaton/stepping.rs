//! Game of Life stepping with B3/S23 rules.

use log::debug;
use rayon::prelude::*;

use super::grid::count_neighbors;
use crate::state::Grid;

/// Decide a cell's next state from its current state and live neighbor count.
///
/// B3/S23 rules:
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Survival: a live cell with 2 or 3 neighbors stays alive
/// - Everything else is dead next generation
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Fill `pending` with the index of every cell that flips this generation.
///
/// Reads only; the grid is untouched, so cells are evaluated in parallel.
/// Indices come out in ascending order.
pub fn collect_changes(grid: &Grid, pending: &mut Vec<usize>) {
    pending.clear();
    pending.par_extend((0..grid.cells.len()).into_par_iter().filter(|&idx| {
        let alive = grid.cells[idx];
        next_state(alive, count_neighbors(grid, idx)) != alive
    }));
}

/// Step the grid forward by one generation.
///
/// Every decision is taken from the pre-step states, then the collected
/// cells are flipped together.
pub fn step_grid(grid: &mut Grid) {
    let mut pending = std::mem::take(&mut grid.pending);
    collect_changes(grid, &mut pending);

    for &idx in &pending {
        grid.cells[idx] = !grid.cells[idx];
    }

    grid.generation += 1;
    debug!(
        "generation {}: {} cells changed",
        grid.generation, pending.len()
    );
    grid.pending = pending;
}
