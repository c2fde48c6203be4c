//! One agent's kinematic state as a plain value type.

use brush_core::Vec2;

/// The full per-agent state moved through the kinematics kernel.
///
/// `AgentState` is the copy-friendly aggregate the kernel consumes and
/// produces; persistent storage lives in the SoA arrays of
/// [`AgentStore`](crate::AgentStore), which assembles and scatters these
/// values at the kernel boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    /// Position in canvas pixels.
    pub pos: Vec2,

    /// Velocity in pixels/sec.  Magnitude never exceeds the configured
    /// speed cap after a kinematics step.
    pub vel: Vec2,

    /// The goal point this agent is travelling toward.
    pub goal: Vec2,

    /// 1 on the tick the agent arrived within the goal radius, else 0.
    pub at_goal: u8,
}

impl AgentState {
    /// An agent at rest at `pos`, aiming for `goal`.
    #[inline]
    pub fn at_rest(pos: Vec2, goal: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            goal,
            at_goal: 0,
        }
    }
}
