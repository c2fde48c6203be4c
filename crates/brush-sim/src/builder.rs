//! Validating builder for constructing a [`Sim`].

use brush_agent::{AgentRngs, AgentStore};
use brush_core::{SimClock, SimParams, SimRng};
use brush_paint::{BrushTexture, PaintKernel};

use crate::{Sim, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - `SimParams` — canvas dimensions, rates, radii, seed, fixed step
/// - `BrushTexture` — the stamp weight mask (static for the run)
///
/// # Optional inputs
///
/// | Method                   | Default |
/// |--------------------------|---------|
/// | `.initial_population(n)` | 0       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params, BrushTexture::radial(7))
///     .initial_population(1000)
///     .build()?;
/// sim.start();
/// ```
pub struct SimBuilder {
    params:             SimParams,
    brush:              BrushTexture,
    initial_population: usize,
}

impl SimBuilder {
    pub fn new(params: SimParams, brush: BrushTexture) -> Self {
        Self {
            params,
            brush,
            initial_population: 0,
        }
    }

    /// Pre-seed `n` agents at canvas center when the simulation starts.
    ///
    /// Disabled by default — all paint comes from pointer spawns — but a
    /// pre-seeded swarm is useful for demos and long-run tests.  Clamped
    /// to `params.max_agents` at start.
    pub fn initial_population(mut self, n: usize) -> Self {
        self.initial_population = n;
        self
    }

    /// Validate the configuration and return an idle [`Sim`].
    ///
    /// Rejects invalid parameters here so a running simulation never
    /// observes a bad configuration.  The returned sim holds no light
    /// buffer yet; call [`Sim::start`] to allocate it and begin running.
    pub fn build(self) -> SimResult<Sim> {
        self.params.validate()?;

        let kernel = PaintKernel::new(&self.params);
        Ok(Sim {
            clock: SimClock::new(self.params.fixed_dt),
            agents: AgentStore::with_capacity(self.params.max_agents),
            rngs: AgentRngs::new(self.params.seed),
            rng: SimRng::new(self.params.seed),
            kernel,
            brush: self.brush,
            light: None,
            initial_population: self.initial_population,
            params: self.params,
        })
    }
}
