//! `brush-kinematics` — the goal-seeking agent update.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`kernel`]   | `step_agent` — the pure per-agent update              |
//! | [`dispatch`] | `step_all` — sequential or Rayon dispatch over agents |
//!
//! # Kernel contract
//!
//! `step_agent` reads exactly one agent's state plus the run parameters and
//! that agent's own RNG — no cross-agent reads, no shared mutable state —
//! so any dispatch order (or full parallelism) produces identical results.
//! The paint pass must only ever see positions produced by a *completed*
//! dispatch; the driver enforces that barrier by committing the returned
//! states before painting.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                           |
//! |------------|--------------------------------------------------|
//! | `parallel` | Runs the dispatch on Rayon's thread pool.        |

pub mod dispatch;
pub mod kernel;


pub use dispatch::step_all;
pub use kernel::step_agent;
