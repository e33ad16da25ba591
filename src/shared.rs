//! Thread-safe grid handle for hosts that step on one thread and edit on another.
//!
//! Every operation holds the lock for its whole duration, so a step's read
//! and write phases form one unit relative to toggles.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;

use crate::error::Result;
use crate::state::Grid;

/// A grid behind a single mutex. Clones share the same grid.
#[derive(Debug, Clone)]
pub struct SharedGrid {
    inner: Arc<Mutex<Grid>>,
}

impl SharedGrid {
    /// Take ownership of `grid`.
    pub fn new(grid: Grid) -> Self {
        SharedGrid {
            inner: Arc::new(Mutex::new(grid)),
        }
    }

    /// Lock the grid. Cells only change in the apply phase of an operation,
    /// which cannot panic, so a poisoned lock still guards a whole generation.
    fn lock(&self) -> MutexGuard<'_, Grid> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advance one generation under the lock, so no toggle lands mid-step.
    pub fn step(&self) {
        self.lock().step();
    }

    /// Locked [`Grid::clear`].
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Locked [`Grid::randomize`].
    pub fn randomize(&self, dead_to_one_live: i32) -> Result<()> {
        self.lock().randomize(dead_to_one_live)
    }

    /// Locked [`Grid::randomize_with`].
    pub fn randomize_with<R: Rng + ?Sized>(
        &self,
        dead_to_one_live: i32,
        rng: &mut R,
    ) -> Result<()> {
        self.lock().randomize_with(dead_to_one_live, rng)
    }

    /// Flip one cell between steps.
    pub fn toggle(&self, row: i32, column: i32) -> Result<()> {
        self.lock().toggle(row, column)
    }

    /// Read one cell.
    pub fn is_alive(&self, row: i32, column: i32) -> Result<bool> {
        self.lock().is_alive(row, column)
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.lock().dimensions()
    }

    /// Steps since construction or the last clear/randomize.
    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    /// Live cell count.
    pub fn population(&self) -> usize {
        self.lock().population()
    }

    /// Run `f` against a consistent view of the grid, e.g. to render a frame.
    pub fn read<T>(&self, f: impl FnOnce(&Grid) -> T) -> T {
        f(&self.lock())
    }

    /// Copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.lock().clone()
    }
}

impl From<Grid> for SharedGrid {
    fn from(grid: Grid) -> Self {
        SharedGrid::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedGrid::new(Grid::new(4, 4, false, 1).unwrap());
        let other = shared.clone();

        other.toggle(1, 1).unwrap();
        assert_eq!(shared.is_alive(1, 1), Ok(true));
        assert_eq!(shared.population(), 1);
    }

    #[test]
    fn test_concurrent_toggles_all_land() {
        let shared = SharedGrid::new(Grid::new(8, 8, false, 1).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|row| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for column in 0..8 {
                        shared.toggle(row, column).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.population(), 64);
    }

    #[test]
    fn test_step_and_toggle_interleave() {
        let shared = SharedGrid::new(Grid::new(16, 16, false, 1).unwrap());
        // Block in one corner, far from the edited cell
        for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            shared.toggle(r, c).unwrap();
        }

        let stepper = {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    shared.step();
                }
            })
        };
        let editor = {
            let shared = shared.clone();
            thread::spawn(move || {
                // Even number of flips; the lone cell dies on the next step anyway
                for _ in 0..50 {
                    shared.toggle(12, 12).unwrap();
                }
            })
        };
        stepper.join().unwrap();
        editor.join().unwrap();

        assert_eq!(shared.generation(), 50);
        shared.read(|grid| {
            for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
                assert_eq!(grid.is_alive(r, c), Ok(true));
            }
        });
    }

    #[test]
    fn test_errors_pass_through() {
        let shared = SharedGrid::new(Grid::new(2, 2, false, 1).unwrap());
        assert!(shared.toggle(2, 0).is_err());
        assert!(shared.randomize(0).is_err());
        assert_eq!(shared.dimensions(), (2, 2));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedGrid::new(Grid::new(3, 3, false, 1).unwrap());
        let snap = shared.snapshot();
        shared.toggle(0, 0).unwrap();
        assert_eq!(snap.is_alive(0, 0), Ok(false));
    }
}
