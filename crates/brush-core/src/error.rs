//! Configuration error type.
//!
//! Sub-crates define their own error enums and either wrap `ParamsError`
//! as a variant or keep it separate — whichever keeps error sites clean.

use thiserror::Error;

/// Rejections produced by [`SimParams::validate`](crate::SimParams::validate).
///
/// Validation runs once, before the simulation is constructed; a driver is
/// never built from an invalid parameter set.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("canvas dimensions must be positive, got {0}x{1}")]
    ZeroDimension(u32, u32),

    #[error("max_agents must be positive")]
    ZeroMaxAgents,

    #[error("fixed_dt must be positive, got {0}")]
    NonPositiveDt(f32),

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },

    #[error("goal inset {inset} leaves no interior on a {res_x}x{res_y} canvas")]
    InsetTooLarge { inset: f32, res_x: u32, res_y: u32 },
}
