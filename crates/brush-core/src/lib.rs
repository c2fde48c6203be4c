//! `brush-core` — foundational types for the brushsim painting simulation.
//!
//! This crate is a dependency of every other `brush-*` crate.  It
//! intentionally has no `brush-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`ids`]    | `AgentId`                                          |
//! | [`vec2`]   | `Vec2`, planar vector arithmetic                   |
//! | [`color`]  | `Rgba`, the light-buffer texel type                |
//! | [`time`]   | `Tick`, `SimClock`                                 |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (driver-level)    |
//! | [`params`] | `SimParams` — the immutable-per-run tuning surface |
//! | [`error`]  | `ParamsError`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod color;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgba;
pub use error::ParamsError;
pub use ids::AgentId;
pub use params::SimParams;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
pub use vec2::Vec2;
