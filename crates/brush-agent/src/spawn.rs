//! Bulk population operations: pre-seeding and pointer-driven spawning.
//!
//! Both operations clamp against `params.max_agents` — overflow is not an
//! error, the surplus simply never spawns.  Goals come from the driver's
//! [`SimRng`]; per-agent RNGs are grown in the same call so the
//! `rngs.len() == store.count` invariant holds at every return.

use brush_core::{SimParams, SimRng, Vec2};

use crate::store::{AgentRngs, AgentStore};
use crate::AgentState;

impl AgentStore {
    /// Create `count` agents at canvas center with zero velocity and
    /// independent random goals inset by `border + goal_rad`.
    ///
    /// Used for the optional pre-seeded population at simulation start.
    /// `count == 0` is a no-op; the population cap still applies.
    pub fn seed_population(
        &mut self,
        rngs:   &mut AgentRngs,
        count:  usize,
        params: &SimParams,
        rng:    &mut SimRng,
    ) -> usize {
        let n = count.min(params.max_agents.saturating_sub(self.count));
        let center = params.center();
        let inset = params.goal_inset();

        for _ in 0..n {
            let goal = params.sample_goal(inset, rng.inner());
            self.push(AgentState::at_rest(center, goal));
        }
        rngs.grow_to(self.count);
        n
    }

    /// Spawn agents at `point` for one pointer-held input frame.
    ///
    /// The count is `spawn_rate * elapsed_secs`, floored, clamped to the
    /// remaining headroom below `max_agents` — so the total population
    /// never exceeds the cap regardless of frame timing.  Each agent gets
    /// a fresh goal inset by `border + goal_rad / 2` and an initial
    /// velocity pointing at it, capped at `agent_speed` (zero when the
    /// goal coincides with `point`).
    ///
    /// Returns the number actually spawned.
    pub fn spawn_at_point(
        &mut self,
        rngs:         &mut AgentRngs,
        point:        Vec2,
        elapsed_secs: f32,
        params:       &SimParams,
        rng:          &mut SimRng,
    ) -> usize {
        let headroom = params.max_agents.saturating_sub(self.count) as f32;
        let n = headroom.min(params.spawn_rate * elapsed_secs).max(0.0) as usize;
        let inset = params.spawn_goal_inset();

        for _ in 0..n {
            let goal = params.sample_goal(inset, rng.inner());
            let vel = (goal - point).clamp_length(params.agent_speed);
            self.push(AgentState {
                pos: point,
                vel,
                goal,
                at_goal: 0,
            });
        }
        rngs.grow_to(self.count);
        n
    }
}
