//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter; the
//! mapping to seconds is held in `SimClock`:
//!
//!   sim_time = tick * fixed_dt_secs
//!
//! Using an integer tick as the canonical unit keeps step counting exact
//! (no floating-point drift in "how many updates ran") while the f32
//! product is only ever consumed as a kernel input (stamp jitter phase).
//!
//! The variable-rate input clock has no representation here — pointer
//! frames carry their own elapsed seconds and never touch the tick counter.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute count of executed fixed-step updates.
///
/// Stored as `u64`: at 50 ticks per second a u64 lasts ~11 billion years,
/// far longer than any conceivable painting session.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between executed fixed ticks and simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.  The
/// driver advances it once per *executed* tick — skipped ticks (empty
/// population, unallocated buffer) do not move simulated time, mirroring a
/// fixed-step update that early-returns before dispatching any work.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many seconds one fixed tick represents.
    pub fixed_dt_secs: f32,
    /// The current tick — advanced by `SimClock::advance()` per executed step.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick zero with the given step size.
    pub fn new(fixed_dt_secs: f32) -> Self {
        Self {
            fixed_dt_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_tick.0 as f32 * self.fixed_dt_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t={:.2}s)", self.current_tick, self.elapsed_secs())
    }
}
