//! C FFI layer for non-Rust hosts.
//!
//! This module exports C ABI functions over an opaque grid handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The handle is a [`SharedGrid`](crate::shared::SharedGrid), so a host may
//! step from its timer thread and toggle from its input thread. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! error-to-status conversion.

pub mod grid;
pub mod lifecycle;

pub use grid::{
    lg_clear, lg_dimensions, lg_get_cell, lg_population, lg_randomize, lg_step, lg_toggle,
};
pub use lifecycle::{lg_create, lg_create_ex, lg_destroy, lg_get_generation, lg_init_logging};

use crate::error::LifeError;

pub const LG_OK: i32 = 0;
pub const LG_NULL_POINTER: i32 = 1;
/// Returned through `lg_create_ex()` for non-positive dimensions.
pub const LG_INVALID_DIMENSION: i32 = 2;
pub const LG_INVALID_ARGUMENT: i32 = 3;
pub const LG_OUT_OF_BOUNDS: i32 = 4;

/// Status code for a grid error.
pub fn status_of(err: &LifeError) -> i32 {
    match err {
        LifeError::InvalidDimension { .. } => LG_INVALID_DIMENSION,
        LifeError::InvalidArgument(_) => LG_INVALID_ARGUMENT,
        LifeError::OutOfBounds { .. } => LG_OUT_OF_BOUNDS,
    }
}

/// Collapse a grid result into a status code.
pub(crate) fn status<T>(result: crate::error::Result<T>) -> i32 {
    match result {
        Ok(_) => LG_OK,
        Err(err) => status_of(&err),
    }
}
