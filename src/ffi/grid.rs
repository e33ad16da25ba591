//! Stepping, repaints, cell access, and size queries.

use super::{status, LG_NULL_POINTER, LG_OK};
use crate::shared::SharedGrid;

/// Advances the grid by one generation (B3/S23, toroidal edges).
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn lg_step(ptr: *const SharedGrid) -> i32 {
    if ptr.is_null() {
        return LG_NULL_POINTER;
    }

    (*ptr).step();
    LG_OK
}

/// Kills every cell.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn lg_clear(ptr: *const SharedGrid) -> i32 {
    if ptr.is_null() {
        return LG_NULL_POINTER;
    }

    (*ptr).clear();
    LG_OK
}

/// Repaints every cell, about one live per `dead_to_one_live`.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if the ratio is below 1.
#[no_mangle]
pub unsafe extern "C" fn lg_randomize(ptr: *const SharedGrid, dead_to_one_live: i32) -> i32 {
    if ptr.is_null() {
        return LG_NULL_POINTER;
    }

    status((*ptr).randomize(dead_to_one_live))
}

/// Flips one cell.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 4 if the coordinates are outside the grid.
#[no_mangle]
pub unsafe extern "C" fn lg_toggle(ptr: *const SharedGrid, row: i32, column: i32) -> i32 {
    if ptr.is_null() {
        return LG_NULL_POINTER;
    }

    status((*ptr).toggle(row, column))
}

/// Reads one cell into `out_alive` (1 = alive, 0 = dead).
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
/// - `out_alive` must be valid for a `u8` write, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 4 if the coordinates are outside the grid.
/// `out_alive` is only written on success.
#[no_mangle]
pub unsafe extern "C" fn lg_get_cell(
    ptr: *const SharedGrid,
    row: i32,
    column: i32,
    out_alive: *mut u8,
) -> i32 {
    if ptr.is_null() || out_alive.is_null() {
        return LG_NULL_POINTER;
    }

    let result = (*ptr).is_alive(row, column);
    if let Ok(alive) = result {
        *out_alive = alive as u8;
    }
    status(result)
}

/// Writes the grid size into `out_rows` and `out_columns`.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
/// - `out_rows` and `out_columns` must be valid for an `i32` write, or null
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn lg_dimensions(
    ptr: *const SharedGrid,
    out_rows: *mut i32,
    out_columns: *mut i32,
) -> i32 {
    if ptr.is_null() || out_rows.is_null() || out_columns.is_null() {
        return LG_NULL_POINTER;
    }

    // Dimensions came in as positive i32 values
    let (rows, columns) = (*ptr).dimensions();
    *out_rows = rows as i32;
    *out_columns = columns as i32;
    LG_OK
}

/// Counts live cells.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
///
/// # Returns
/// The live cell count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lg_population(ptr: *const SharedGrid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).population() as u64
}
