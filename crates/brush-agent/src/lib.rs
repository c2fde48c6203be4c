//! `brush-agent` — agent storage for the brushsim painting simulation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`state`] | `AgentState` — one agent's kinematic state as a value type    |
//! | [`store`] | `AgentStore` (SoA arrays) + `AgentRngs` (per-agent RNG)       |
//! | [`spawn`] | Bulk creation: pre-seeded population, pointer spawns, replace |
//! | [`error`] | `AgentError`                                                  |
//!
//! # Ownership
//!
//! The driver is the sole mutator of population size: agents are created by
//! the spawn operations, mutated each tick via [`AgentStore::replace_all`],
//! and destroyed only by [`AgentStore::reset`].  Kernels see the store
//! read-only.

pub mod error;
pub mod spawn;
pub mod state;
pub mod store;


pub use error::AgentError;
pub use state::AgentState;
pub use store::{AgentRngs, AgentStore};
