//! End-to-end checks through the public `Grid` API.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::LifeError;
use crate::state::Grid;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grid_with(rows: i32, columns: i32, live: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::new(rows, columns, false, 1).unwrap();
    for &(r, c) in live {
        grid.toggle(r, c).unwrap();
    }
    grid
}

fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
    grid.live_cells().collect()
}

#[test]
fn test_every_cell_has_eight_neighbors_in_range() {
    for rows in 1..=5 {
        for columns in 1..=5 {
            let grid = Grid::new(rows, columns, false, 1).unwrap();
            for r in 0..rows {
                for c in 0..columns {
                    let n = grid.neighbors(r, c).unwrap();
                    assert_eq!(n.len(), 8);
                    assert!(n
                        .iter()
                        .all(|&(nr, nc)| nr < rows as usize && nc < columns as usize));
                }
            }
        }
    }
}

#[test]
fn test_origin_wraps_to_far_edges() {
    let grid = Grid::new(7, 9, false, 1).unwrap();
    let n = grid.neighbors(0, 0).unwrap();

    assert!(n.contains(&(6, 8)));
    assert!(n.contains(&(6, 0)));
    assert!(n.contains(&(0, 8)));
}

#[test]
fn test_step_is_deterministic() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(2024);
    let start = Grid::with_rng(30, 40, true, 4, &mut rng).unwrap();

    let mut a = start.clone();
    let mut b = start.clone();
    for _ in 0..20 {
        a.step();
        b.step();
        assert_eq!(a.cells(), b.cells());
    }
}

#[test]
fn test_top_row_blinker() {
    let mut grid = grid_with(5, 5, &[(0, 0), (0, 1), (0, 2)]);

    grid.step();

    assert_eq!(grid.is_alive(1, 1), Ok(true));
    assert_eq!(grid.is_alive(0, 1), Ok(true));
    assert_eq!(grid.is_alive(4, 1), Ok(true));
    assert_eq!(grid.is_alive(0, 0), Ok(false));
    assert_eq!(grid.is_alive(0, 2), Ok(false));

    // Period 2
    grid.step();
    assert_eq!(live_set(&grid), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_block_is_still() {
    let mut grid = grid_with(8, 8, &[(3, 3), (3, 4), (4, 3), (4, 4)]);
    let before = live_set(&grid);

    grid.steps(25);
    assert_eq!(live_set(&grid), before);
}

#[test]
fn test_glider_crosses_the_seam() {
    // Glider moving down-right returns home after 4 * size generations
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut grid = grid_with(8, 8, &glider);
    let before = live_set(&grid);

    grid.steps(32);
    assert_eq!(live_set(&grid), before);
    assert_eq!(grid.population(), 5);
}

#[test]
fn test_clear_kills_everything() {
    let mut grid = Grid::with_rng(10, 10, true, 2, &mut StdRng::seed_from_u64(3)).unwrap();
    grid.step();

    grid.clear();
    for r in 0..10 {
        for c in 0..10 {
            assert_eq!(grid.is_alive(r, c), Ok(false));
        }
    }
    assert_eq!(grid.generation(), 0);
}

#[test]
fn test_randomize_ratio_one_fills_every_cell() {
    let mut grid = Grid::new(6, 9, false, 1).unwrap();
    grid.randomize(1).unwrap();
    assert_eq!(grid.population(), 54);
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let mut grid = Grid::with_rng(6, 6, true, 3, &mut StdRng::seed_from_u64(11)).unwrap();
    let before = grid.cells().to_vec();

    grid.toggle(4, 5).unwrap();
    assert_ne!(grid.cells(), &before[..]);
    grid.toggle(4, 5).unwrap();
    assert_eq!(grid.cells(), &before[..]);
}

#[test]
fn test_bounds_leave_state_unchanged() {
    let mut grid = Grid::with_rng(4, 5, true, 2, &mut StdRng::seed_from_u64(8)).unwrap();
    let before = grid.cells().to_vec();

    for (r, c) in [(-1, 0), (4, 0), (0, 5)] {
        assert!(matches!(
            grid.toggle(r, c),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.is_alive(r, c),
            Err(LifeError::OutOfBounds { .. })
        ));
    }
    assert_eq!(grid.cells(), &before[..]);
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(
        Grid::new(0, 4, false, 1).unwrap_err(),
        LifeError::InvalidDimension {
            rows: 0,
            columns: 4,
        }
    );
    assert_eq!(
        Grid::new(4, 0, false, 1).unwrap_err(),
        LifeError::InvalidDimension {
            rows: 4,
            columns: 0,
        }
    );
}

#[test]
fn test_degenerate_single_row_keeps_duplicates() {
    let grid = grid_with(1, 5, &[]);
    let n = grid.neighbors(0, 2).unwrap();

    // Vertical offsets fold onto the same row
    assert_eq!(n.iter().filter(|&&p| p == (0, 2)).count(), 2);
    assert_eq!(n.iter().filter(|&&p| p == (0, 1)).count(), 3);
    assert_eq!(n.iter().filter(|&&p| p == (0, 3)).count(), 3);
}

#[test]
fn test_degenerate_single_row_pair_splits() {
    // Each live cell counts itself twice and its partner three times: 5, dies.
    // Outer cells see one live neighbor three times: born.
    let mut grid = grid_with(1, 6, &[(0, 2), (0, 3)]);

    grid.step();
    assert_eq!(live_set(&grid), vec![(0, 1), (0, 4)]);
}

#[test]
fn test_error_messages() {
    let err = Grid::new(0, 3, false, 1).unwrap_err();
    assert_eq!(err.to_string(), "invalid grid dimensions: 0x3");

    let grid = Grid::new(2, 3, false, 1).unwrap();
    let err = grid.is_alive(5, 1).unwrap_err();
    assert_eq!(err.to_string(), "cell (5, 1) is outside the 2x3 grid");
}
