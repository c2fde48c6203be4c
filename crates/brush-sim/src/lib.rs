//! `brush-sim` — the fixed-timestep driver for the brushsim painting
//! simulation.
//!
//! # Two clocks, one barrier
//!
//! ```text
//! input clock  (variable rate, host frames):
//!   pointer held?  →  sim.on_input_frame(point, frame_dt)   // spawns
//!
//! fixed clock  (one call per fixed interval):
//!   sim.tick(source):
//!     ① guard     — skip while Idle (no buffer) or population empty
//!     ② kinematics — step_all over every agent (parallel feature)
//!     ③ barrier    — paint only ever sees completed post-move positions
//!     ④ paint      — decay → diffuse → source blend → stamp
//!     ⑤ commit     — replace_all writes kernel output back to the store
//!     ⑥ advance    — clock moves one fixed step
//! ```
//!
//! Spawning happens on the input clock strictly between fixed ticks, never
//! mid-dispatch; the light buffer is owned by [`Sim`] and no external
//! writer can touch it between ticks.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs both kernel dispatches on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use brush_core::SimParams;
//! use brush_paint::BrushTexture;
//! use brush_sim::{NoopObserver, NoopPresenter, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimParams::default(), BrushTexture::radial(7))
//!     .initial_population(0)
//!     .build()?;
//! sim.start();
//! loop {
//!     sim.on_input_frame(pointer, frame_dt);       // host input clock
//!     sim.run_ticks(1, &mut presenter, &mut NoopObserver)?;
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod present;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use present::{NoopPresenter, PresentationAdapter};
pub use sim::{Sim, TickOutcome};
