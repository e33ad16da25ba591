//! Host settings: grid size, canvas layout, colours, and timing.
//!
//! Values are plain data for the host to consume. Layout helpers return
//! `None` instead of overflowing when a hand-built config describes a
//! canvas wider than `u32` pixels.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::warn;

use crate::error::Result;
use crate::session::Session;
use crate::state::Grid;

pub const DEFAULT_ROWS: i32 = 50;
pub const DEFAULT_COLUMNS: i32 = 50;
pub const DEFAULT_CELL_SIZE: u32 = 10; // Side of a drawn cell, pixels
pub const DEFAULT_BORDER_SIZE: u32 = 1; // Gap between cells, pixels
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 100;
pub const DEFAULT_DEAD_TO_ONE_LIVE: i32 = 5; // ~1 live cell per 5 on random fill
pub const DEFAULT_LIVE_COLOR: [u8; 3] = [50, 205, 50]; // Lime green
pub const DEFAULT_DEAD_COLOR: [u8; 3] = [0, 0, 0];

/// Everything a host needs to build and draw a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub rows: i32,
    pub columns: i32,
    /// Side of a drawn cell, pixels.
    pub cell_size: u32,
    /// Gap after each cell, pixels.
    pub border_size: u32,
    /// RGB fill for live cells.
    pub live_color: [u8; 3],
    /// RGB fill for dead cells.
    pub dead_color: [u8; 3],
    pub step_interval_ms: u64,
    /// Randomize the grid when it is built.
    pub random_fill: bool,
    pub dead_to_one_live: i32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cell_size: DEFAULT_CELL_SIZE,
            border_size: DEFAULT_BORDER_SIZE,
            live_color: DEFAULT_LIVE_COLOR,
            dead_color: DEFAULT_DEAD_COLOR,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            random_fill: true,
            dead_to_one_live: DEFAULT_DEAD_TO_ONE_LIVE,
        }
    }
}

impl LifeConfig {
    /// Defaults overridden by `LIFE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `LIFE_*` key.
    /// Values that fail to parse are logged and skipped, as are cell and
    /// border sizes whose canvas would not fit in `u32` pixels.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        override_with(&lookup, "LIFE_ROWS", &mut config.rows);
        override_with(&lookup, "LIFE_COLUMNS", &mut config.columns);
        override_with(&lookup, "LIFE_CELL_SIZE", &mut config.cell_size);
        override_with(&lookup, "LIFE_BORDER_SIZE", &mut config.border_size);
        override_with(&lookup, "LIFE_STEP_MS", &mut config.step_interval_ms);
        override_with(&lookup, "LIFE_RANDOM_FILL", &mut config.random_fill);
        override_with(&lookup, "LIFE_DEAD_TO_LIVE", &mut config.dead_to_one_live);

        if config.canvas_size().is_none() {
            warn!(
                "ignoring cell size {} with border {}: canvas does not fit in u32",
                config.cell_size, config.border_size
            );
            config.cell_size = DEFAULT_CELL_SIZE;
            config.border_size = DEFAULT_BORDER_SIZE;
        }

        config
    }

    /// Delay between timer-driven steps.
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Distance between the origins of two adjacent cells.
    fn pitch(&self) -> Option<u32> {
        self.cell_size.checked_add(self.border_size)
    }

    /// Canvas `(width, height)` in pixels, one border gap per cell.
    /// `None` if either side overflows `u32`.
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        let pitch = self.pitch()?;
        let columns = u32::try_from(self.columns.max(0)).ok()?;
        let rows = u32::try_from(self.rows.max(0)).ok()?;
        Some((columns.checked_mul(pitch)?, rows.checked_mul(pitch)?))
    }

    /// Top-left pixel `(x, y)` of a cell, `None` on overflow.
    pub fn cell_origin(&self, row: u32, column: u32) -> Option<(u32, u32)> {
        let pitch = self.pitch()?;
        Some((column.checked_mul(pitch)?, row.checked_mul(pitch)?))
    }

    /// Map a pixel to the `(row, column)` of the cell slot containing it,
    /// gap included. `None` outside the canvas or for non-finite input.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i32, i32)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let pitch = self.pitch().filter(|&p| p > 0)?;
        // Float to int casts saturate, so huge pixels land past the last cell
        let column = x as u32 / pitch;
        let row = y as u32 / pitch;
        let rows = u32::try_from(self.rows).unwrap_or(0);
        let columns = u32::try_from(self.columns).unwrap_or(0);
        if row >= rows || column >= columns {
            return None;
        }
        Some((i32::try_from(row).ok()?, i32::try_from(column).ok()?))
    }

    /// Colour for a cell state.
    pub fn color_of(&self, alive: bool) -> [u8; 3] {
        if alive {
            self.live_color
        } else {
            self.dead_color
        }
    }

    /// Build a grid from the size and fill settings.
    pub fn build_grid(&self) -> Result<Grid> {
        Grid::new(
            self.rows,
            self.columns,
            self.random_fill,
            self.dead_to_one_live,
        )
    }

    /// Build a paused [`Session`] around [`LifeConfig::build_grid`].
    pub fn build_session(&self) -> Result<Session> {
        Session::from_config(self)
    }
}

fn override_with<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(_) => warn!("ignoring {key}={raw:?}: not a valid value"),
    }
}
