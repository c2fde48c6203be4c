//! The pure per-agent goal-seeking step.

use brush_agent::AgentState;
use brush_core::{AgentRng, SimParams};

/// Advance one agent by `dt` seconds.
///
/// - Within `goal_rad` of the goal: the agent has arrived.  `at_goal` is
///   set for this tick and a fresh goal is drawn from the agent's own RNG
///   (inset by `border + goal_rad`), keeping the swarm in perpetual
///   motion.  Position and velocity are untouched on the arrival tick.
/// - Otherwise: accelerate toward the goal by `acc_mult`, clamp speed to
///   `agent_speed`, integrate, and clamp the position to the canvas.
///   Positions are clamped rather than wrapped because the paint kernel
///   indexes the light buffer by agent position.
///
/// The step is order-insensitive: it reads nothing but `state`, `params`,
/// and `rng`, all exclusively owned during the call.
pub fn step_agent(
    mut state: AgentState,
    params:    &SimParams,
    dt:        f32,
    rng:       &mut AgentRng,
) -> AgentState {
    let dir = state.goal - state.pos;
    let dist = dir.length();

    if dist <= params.goal_rad {
        state.at_goal = 1;
        state.goal = params.sample_goal(params.goal_inset(), rng.inner());
    } else {
        state.at_goal = 0;
        // dist > goal_rad >= 0 here, so the normalisation is finite.
        let acc = dir * (params.acc_mult / dist);
        state.vel = (state.vel + acc * dt).clamp_length(params.agent_speed);
        state.pos = params.clamp_to_canvas(state.pos + state.vel * dt);
    }

    state
}
