//! Tick timer state.
//!
//! The controller decides *when* the automatic descent runs (armed on start,
//! disarmed on game over); the runtime owns the actual clock. Every arming
//! bumps a generation counter so the runtime can tell a fresh arming from a
//! timer it is already running, and drop the old one.

use std::time::Duration;

use crate::types::DEFAULT_TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    period: Duration,
    armed: bool,
    generation: u64,
}

impl TickTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: false,
            generation: 0,
        }
    }

    /// (Re)start the timer. Any previous arming is superseded.
    pub fn arm(&mut self) {
        self.armed = true;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TICK_MS))
    }
}
