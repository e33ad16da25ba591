//! Handle creation, destruction, logging setup, and generation queries.

use log::warn;

use super::{status_of, LG_OK};
use crate::shared::SharedGrid;
use crate::state::Grid;

/// Initializes `env_logger` from `RUST_LOG`. Safe to call more than once.
#[no_mangle]
pub extern "C" fn lg_init_logging() {
    let _ = env_logger::try_init();
}

/// Creates a new grid and returns an opaque pointer.
///
/// `random_fill != 0` fills roughly one cell in `dead_to_one_live` at random.
///
/// # Returns
/// A pointer to a new grid handle, or null if the dimensions are not
/// positive or the fill ratio is invalid. Use `lg_create_ex()` to learn which.
///
/// # Safety
/// The returned pointer must eventually be freed with `lg_destroy()`.
#[no_mangle]
pub extern "C" fn lg_create(
    rows: i32,
    columns: i32,
    random_fill: u8,
    dead_to_one_live: i32,
) -> *mut SharedGrid {
    // SAFETY: a null status pointer is never written
    unsafe {
        lg_create_ex(
            rows,
            columns,
            random_fill,
            dead_to_one_live,
            std::ptr::null_mut(),
        )
    }
}

/// Like `lg_create()`, also reporting why creation failed.
///
/// # Safety
/// - `out_status` must be valid for an `i32` write, or null
/// - The returned pointer must eventually be freed with `lg_destroy()`
///
/// # Returns
/// A pointer to a new grid handle, or null on failure. `out_status` receives
/// 0 on success, 2 if the dimensions are not positive, 3 if the fill ratio
/// is invalid.
#[no_mangle]
pub unsafe extern "C" fn lg_create_ex(
    rows: i32,
    columns: i32,
    random_fill: u8,
    dead_to_one_live: i32,
    out_status: *mut i32,
) -> *mut SharedGrid {
    let (handle, code) = match Grid::new(rows, columns, random_fill != 0, dead_to_one_live) {
        Ok(grid) => (Box::into_raw(Box::new(SharedGrid::new(grid))), LG_OK),
        Err(err) => {
            warn!("lg_create rejected: {err}");
            (std::ptr::null_mut(), status_of(&err))
        }
    };
    if !out_status.is_null() {
        *out_status = code;
    }
    handle
}

/// Destroys a grid handle and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lg_destroy(ptr: *mut SharedGrid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lg_get_generation(ptr: *const SharedGrid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
