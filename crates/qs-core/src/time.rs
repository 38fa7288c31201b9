//! Simulation time model.
//!
//! # Design
//!
//! The scheduler advances a `Tick` counter; simulated time is derived from it:
//!
//!   time = tick * tick_size
//!
//! Deriving time from an integer counter rather than accumulating
//! `t += tick_size` keeps the clock free of floating-point drift, so tick
//! `n` always maps to the same time regardless of how many ticks preceded it.
//! Completions are only observed at tick boundaries, which bounds the
//! quantisation error of any completion timestamp by one tick.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute scheduler iteration counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Simulated time at this tick for a given tick size.
    #[inline]
    pub fn time(self, tick_size: f64) -> f64 {
        self.0 as f64 * tick_size
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Global scheduler clock: the current tick plus the fixed tick size.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated time units per tick.  Default: 0.01.
    pub tick_size: f64,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_size: f64) -> Self {
        Self {
            tick_size,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated time at the current tick.
    #[inline]
    pub fn now(&self) -> f64 {
        self.current_tick.time(self.tick_size)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t={:.4})", self.current_tick, self.now())
    }
}
