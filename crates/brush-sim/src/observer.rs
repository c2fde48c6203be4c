//! Simulation observer trait for progress reporting and data collection.

use brush_agent::AgentStore;
use brush_core::Tick;
use brush_paint::LightBuffer;

use crate::sim::TickOutcome;

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `run_ticks` never calls
/// [`on_sim_end`][Self::on_sim_end] — the host loop has no terminal state,
/// so the host invokes it once when it stops driving the simulation (output
/// observers flush their files there).
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, population: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {population} sprites");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick attempt, before the guard.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after an executed tick (both kernels ran and committed).
    fn on_tick_end(&mut self, _tick: Tick, _population: usize) {}

    /// Called when a tick was skipped — the no-op log for an unallocated
    /// buffer or an empty population.  `outcome` says which.
    fn on_tick_skipped(&mut self, _tick: Tick, _outcome: TickOutcome) {}

    /// Called every `params.snapshot_interval_ticks` executed ticks with
    /// read-only access to the painted buffer and the population, so
    /// output writers can record state without the sim knowing any format.
    fn on_snapshot(&mut self, _tick: Tick, _light: &LightBuffer, _agents: &AgentStore) {}

    /// Called by the host once it stops driving the simulation.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
