//! Dispatch of the per-agent step over the whole population.

use brush_agent::{AgentRngs, AgentState, AgentStore};
use brush_core::SimParams;

use crate::kernel::step_agent;

/// Run [`step_agent`] for every live agent and collect the results.
///
/// The returned `Vec` has exactly `store.count` elements in agent-index
/// order; the caller commits it with [`AgentStore::replace_all`].  With the
/// `parallel` Cargo feature each agent is processed on Rayon's thread pool —
/// the split borrow (`&store` shared, `&mut rngs.inner` exclusive per slot)
/// is why RNGs live outside the store.
pub fn step_all(
    store:  &AgentStore,
    rngs:   &mut AgentRngs,
    params: &SimParams,
    dt:     f32,
) -> Vec<AgentState> {
    debug_assert_eq!(rngs.len(), store.count);

    #[cfg(not(feature = "parallel"))]
    {
        rngs.inner
            .iter_mut()
            .enumerate()
            .take(store.count)
            .map(|(i, rng)| step_agent(store.snapshot(i), params, dt, rng))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        rngs.inner[..store.count]
            .par_iter_mut()
            .enumerate()
            .map(|(i, rng)| step_agent(store.snapshot(i), params, dt, rng))
            .collect()
    }
}
