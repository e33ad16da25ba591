//! Core grid structure and its public operations.

use log::info;
use rand::Rng;

use crate::automaton::{self, grid::coords_of};
use crate::error::Result;

/// A toroidal Game of Life grid.
///
/// Cells live in a flat row-major arena. Each cell's 8 wrapped neighbors are
/// stored as arena indices, computed once at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) cells: Vec<bool>,
    pub(crate) neighbors: Vec<[usize; 8]>,
    /// Reused pending-change buffer for `step`.
    pub(crate) pending: Vec<usize>,
    pub(crate) generation: u64,
}

impl Grid {
    /// Create a grid, optionally filled at random with roughly one live cell
    /// per `dead_to_one_live` cells.
    ///
    /// `dead_to_one_live` is only checked when `random_fill` is set.
    pub fn new(
        rows: i32,
        columns: i32,
        random_fill: bool,
        dead_to_one_live: i32,
    ) -> Result<Self> {
        Self::with_rng(
            rows,
            columns,
            random_fill,
            dead_to_one_live,
            &mut rand::thread_rng(),
        )
    }

    /// Like [`Grid::new`], drawing the random fill from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        rows: i32,
        columns: i32,
        random_fill: bool,
        dead_to_one_live: i32,
        rng: &mut R,
    ) -> Result<Self> {
        let mut grid = automaton::create_grid(rows, columns)?;
        if random_fill {
            automaton::randomize(&mut grid, dead_to_one_live, rng)?;
        }
        info!(
            "created {}x{} grid ({} live)",
            grid.rows, grid.columns, grid.population()
        );
        Ok(grid)
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        automaton::step_grid(self);
    }

    /// Advance `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        automaton::clear(self);
    }

    /// Repaint every cell at random using the thread-local RNG.
    pub fn randomize(&mut self, dead_to_one_live: i32) -> Result<()> {
        automaton::randomize(self, dead_to_one_live, &mut rand::thread_rng())
    }

    /// Like [`Grid::randomize`], drawing from `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        dead_to_one_live: i32,
        rng: &mut R,
    ) -> Result<()> {
        automaton::randomize(self, dead_to_one_live, rng)
    }

    /// Flip the cell at `(row, column)`.
    pub fn toggle(&mut self, row: i32, column: i32) -> Result<()> {
        automaton::toggle(self, row, column)
    }

    /// Whether the cell at `(row, column)` is alive.
    pub fn is_alive(&self, row: i32, column: i32) -> Result<bool> {
        automaton::query(self, row, column)
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Steps applied since construction or the last clear/randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Cell states in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The 8 wrapped neighbor coordinates of `(row, column)`, duplicates included.
    pub fn neighbors(&self, row: i32, column: i32) -> Result<[(usize, usize); 8]> {
        let idx = automaton::checked_index(self, row, column)?;
        Ok(self.neighbors[idx].map(|n| coords_of(self, n)))
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| coords_of(self, idx))
    }
}
