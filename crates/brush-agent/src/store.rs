//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The parallel kinematics dispatch needs `&mut AgentRngs` (exclusive
//! mutable access to each agent's RNG, for goal reassignment on arrival)
//! and `&AgentStore` (shared read access to the current population)
//! simultaneously.  Rust's borrow checker forbids this if both live inside
//! a single struct.  Keeping RNGs in a separate `AgentRngs` struct resolves
//! the conflict cleanly:
//!
//! ```ignore
//! // brush-kinematics dispatch (simplified):
//! let store: &AgentStore = &sim.agents;
//! let next: Vec<AgentState> = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| step_agent(store.snapshot(i), params, dt, rng))
//!     .collect();
//! ```

use brush_core::{AgentId, AgentRng, Vec2};

use crate::{AgentError, AgentResult, AgentState};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to
/// enable simultaneous `&mut AgentRngs` + `&AgentStore` borrows in the
/// parallel kinematics phase.
///
/// `AgentRngs` is `Send` (the inner `SmallRng` is `Send`) but intentionally
/// not `Sync` — per-agent RNG state must never be shared between threads.
/// Rayon's `par_iter_mut()` handles the exclusive-per-thread access pattern.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
    global_seed: u64,
}

impl AgentRngs {
    /// An empty RNG pool seeded from `global_seed` as agents arrive.
    pub fn new(global_seed: u64) -> Self {
        Self { inner: Vec::new(), global_seed }
    }

    /// Grow the pool so every agent index below `count` has an RNG.
    ///
    /// Seeds depend only on `(global_seed, index)`, so agents spawned late
    /// in a run draw the same sequence they would have drawn if pre-seeded —
    /// reproducibility survives pointer-driven population growth.
    pub fn grow_to(&mut self, count: usize) {
        while self.inner.len() < count {
            let id = AgentId(self.inner.len() as u32);
            self.inner.push(AgentRng::new(self.global_seed, id));
        }
    }

    /// Drop all per-agent RNG state (full-population reset).
    pub fn reset(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is
/// the index into all of them:
///
/// ```ignore
/// let pos = store.pos[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Arrays are reserved up to the configured population cap at construction,
/// so spawning never reallocates mid-run.
pub struct AgentStore {
    /// Number of live agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Position in canvas pixels.
    pub pos: Vec<Vec2>,
    /// Velocity in pixels/sec.
    pub vel: Vec<Vec2>,
    /// Current goal point.
    pub goal: Vec<Vec2>,
    /// Arrival flag: 1 on the tick of arrival, else 0.
    pub at_goal: Vec<u8>,
}

impl AgentStore {
    /// Create an empty store with room for `capacity` agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            pos: Vec::with_capacity(capacity),
            vel: Vec::with_capacity(capacity),
            goal: Vec::with_capacity(capacity),
            at_goal: Vec::with_capacity(capacity),
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Assemble agent `i`'s state as a value for the kinematics kernel.
    #[inline]
    pub fn snapshot(&self, i: usize) -> AgentState {
        AgentState {
            pos: self.pos[i],
            vel: self.vel[i],
            goal: self.goal[i],
            at_goal: self.at_goal[i],
        }
    }

    /// Append one agent.  Package-private: population growth goes through
    /// the bulk spawn operations in [`spawn`](crate::spawn).
    pub(crate) fn push(&mut self, state: AgentState) {
        self.pos.push(state.pos);
        self.vel.push(state.vel);
        self.goal.push(state.goal);
        self.at_goal.push(state.at_goal);
        self.count += 1;
    }

    /// Atomically swap the entire population with kinematics results.
    ///
    /// The kernel never changes population size, so `states.len()` must
    /// equal the current count; a mismatch is rejected without touching
    /// any array.
    pub fn replace_all(&mut self, states: &[AgentState]) -> AgentResult<()> {
        if states.len() != self.count {
            return Err(AgentError::CountMismatch {
                expected: self.count,
                got: states.len(),
            });
        }
        for (i, s) in states.iter().enumerate() {
            self.pos[i] = s.pos;
            self.vel[i] = s.vel;
            self.goal[i] = s.goal;
            self.at_goal[i] = s.at_goal;
        }
        Ok(())
    }

    /// Destroy the whole population (the only way agents are removed).
    pub fn reset(&mut self) {
        self.count = 0;
        self.pos.clear();
        self.vel.clear();
        self.goal.clear();
        self.at_goal.clear();
    }
}
