//! `brush-paint` — the light buffer and the paint accumulation kernel.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`buffer`] | `LightBuffer` — the persistent RGBA accumulation grid       |
//! | [`brush`]  | `BrushTexture` — static stamp weight mask                   |
//! | [`source`] | `SourceTexture` — per-tick read-only scene overlay          |
//! | [`kernel`] | `PaintKernel` — decay → diffuse → source blend → stamp      |
//! | [`error`]  | `PaintError`                                                |
//!
//! # Per-tick pipeline
//!
//! ```text
//! pass 1 (gather, per pixel, row-parallel with the `parallel` feature):
//!   c  = front[x,y] * (1 - decay)            exponential fade toward zero
//!   c += diffuse * (mean4(neighbours) - c)   4-neighbourhood, clamped edges
//!   c += source[x,y]                         additive overlay, if bound
//!   scratch[x,y] = c                         planes swap after the pass
//!
//! pass 2 (scatter, per agent):
//!   for each pixel of the agent's footprint disc (radius agent_rad):
//!     light += base_color * brush_weight * jitter * acc_mult
//! ```
//!
//! The gather pass reads only the pre-tick plane and writes only the
//! scratch plane, so pixels are independent; the stamp pass bounds each
//! agent's influence to a `2·agent_rad + 1` window, giving
//! O(agents × agent_rad²) instead of O(pixels × agents).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the gather pass on Rayon's thread pool.    |

pub mod brush;
pub mod buffer;
pub mod error;
pub mod kernel;
pub mod source;


pub use brush::BrushTexture;
pub use buffer::LightBuffer;
pub use error::{PaintError, PaintResult};
pub use kernel::PaintKernel;
pub use source::SourceTexture;
