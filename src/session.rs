//! Interactive session policy layered over a [`Grid`].
//!
//! Tracks the running/paused flag, decides when a timer tick should step,
//! and turns pointer gestures into toggles. Nothing here draws or sleeps:
//! the host polls [`Session::tick`] from its own timer and reads the grid
//! back to repaint.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::state::Grid;

/// Click/drag painting state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PaintGesture {
    active: bool,
    /// Last cell toggled by this gesture.
    last: Option<(i32, i32)>,
}

/// A grid plus the run/pause, timing, and painting state around it.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    running: bool,
    step_interval: Duration,
    /// When the last tick-driven step ran. `None` steps on the next tick.
    last_step: Option<Instant>,
    dead_to_one_live: i32,
    paint: PaintGesture,
}

impl Session {
    /// Wrap `grid` in a paused session.
    pub fn new(grid: Grid, step_interval: Duration, dead_to_one_live: i32) -> Result<Self> {
        if dead_to_one_live <= 0 {
            return Err(LifeError::InvalidArgument(dead_to_one_live));
        }
        Ok(Session {
            grid,
            running: false,
            step_interval,
            last_step: None,
            dead_to_one_live,
            paint: PaintGesture::default(),
        })
    }

    /// Build the grid and session described by `config`.
    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        Self::new(
            config.build_grid()?,
            config.step_interval(),
            config.dead_to_one_live,
        )
    }

    /// The grid, for drawing.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give up the session, keeping the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Whether ticks currently step.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Minimum delay between tick-driven steps.
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Change the tick pacing. Takes effect from the next tick.
    pub fn set_step_interval(&mut self, interval: Duration) {
        self.step_interval = interval;
    }

    /// Flip between running and paused. Returns the new running flag.
    pub fn start_stop(&mut self) -> bool {
        self.running = !self.running;
        if self.running {
            self.last_step = None;
        }
        let state = if self.running { "started" } else { "paused" };
        info!("session {state}");
        self.running
    }

    /// Stop timer-driven stepping. Already paused is fine.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Called from the host's timer. Steps once if running and the interval
    /// has elapsed since the last tick-driven step; returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.step_interval {
                return false;
            }
        }
        self.grid.step();
        self.last_step = Some(now);
        true
    }

    /// How long the host may wait before the next tick can step.
    /// `None` while paused.
    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(match self.last_step {
            Some(last) => self
                .step_interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }

    /// Pause and advance exactly one generation.
    pub fn step_once(&mut self) {
        self.pause();
        self.grid.step();
    }

    /// Pause and kill every cell.
    pub fn clear(&mut self) {
        self.pause();
        self.grid.clear();
    }

    /// Pause and repaint at the configured ratio.
    pub fn randomize(&mut self) -> Result<()> {
        self.pause();
        self.grid.randomize(self.dead_to_one_live)
    }

    /// Direct edit, bypassing gesture tracking.
    pub fn toggle(&mut self, row: i32, column: i32) -> Result<()> {
        self.grid.toggle(row, column)
    }

    /// Whether a press started a gesture that has not ended yet.
    pub fn is_painting(&self) -> bool {
        self.paint.active
    }

    /// Button pressed over the grid: pause and start a paint gesture.
    pub fn press(&mut self) {
        self.pause();
        self.paint = PaintGesture {
            active: true,
            last: None,
        };
    }

    /// Pointer moved onto `(row, column)`. While painting, toggles each
    /// distinct cell once. A released button ends the gesture instead.
    pub fn enter(&mut self, row: i32, column: i32, button_held: bool) -> bool {
        if !self.paint.active {
            return false;
        }
        if !button_held {
            self.paint = PaintGesture::default();
            return false;
        }
        if self.paint.last == Some((row, column)) {
            return false;
        }
        if self.paint_toggle(row, column) {
            self.paint.last = Some((row, column));
            return true;
        }
        false
    }

    /// Button released over `(row, column)`. Toggles that cell unless the
    /// gesture already painted it last; without a gesture it is a plain click.
    pub fn release(&mut self, row: i32, column: i32) -> bool {
        let wanted = !self.paint.active || self.paint.last != Some((row, column));
        self.paint = PaintGesture::default();
        wanted && self.paint_toggle(row, column)
    }

    fn paint_toggle(&mut self, row: i32, column: i32) -> bool {
        match self.grid.toggle(row, column) {
            Ok(()) => true,
            Err(err) => {
                debug!("ignoring paint: {err}");
                false
            }
        }
    }
}
