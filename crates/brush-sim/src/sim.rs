//! The `Sim` struct and its fixed-tick loop.

use brush_agent::{AgentRngs, AgentStore};
use brush_core::{SimClock, SimParams, SimRng, Vec2};
use brush_kinematics::step_all;
use brush_paint::{BrushTexture, LightBuffer, PaintKernel, SourceTexture};

use crate::{PresentationAdapter, SimObserver, SimResult};

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What a call to [`Sim::tick`] did.
///
/// Skips are not errors: the loop keeps ticking, and
/// [`SimObserver::on_tick_skipped`] is the no-op log entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Both kernels ran and their results were committed.
    Stepped,
    /// Skipped — no live agents, nothing to simulate or paint.
    EmptyPopulation,
    /// Skipped — [`Sim::start`] has not allocated the light buffer yet.
    NoBuffer,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// Owns everything with cross-tick lifetime: the population, the per-agent
/// and driver RNGs, the fixed clock, and (once running) the light buffer.
/// Two states:
///
/// - **Idle** — built and validated, no buffer allocated; ticks skip.
/// - **Running** — after [`start`](Self::start); ticks execute.
///
/// There is no terminal state: the host simply stops calling
/// [`tick`](Self::tick).  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration — immutable for the run.
    pub params: SimParams,

    /// Fixed simulation clock; advances once per *executed* tick.
    pub clock: SimClock,

    /// The population (SoA arrays).  The driver is the sole mutator of its
    /// size.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow
    /// parallel dispatch.
    pub rngs: AgentRngs,

    /// Driver-level RNG used by spawn-time goal sampling.
    pub rng: SimRng,

    pub(crate) kernel: PaintKernel,
    pub(crate) brush: BrushTexture,
    pub(crate) light: Option<LightBuffer>,
    pub(crate) initial_population: usize,
}

impl Sim {
    // ── State machine ─────────────────────────────────────────────────────

    /// Transition Idle → Running: allocate the light buffer and create the
    /// pre-seeded population (if configured).  Idempotent — calling it on
    /// a running sim changes nothing.
    pub fn start(&mut self) {
        if self.light.is_some() {
            return;
        }
        self.light = Some(LightBuffer::new(self.params.res_x, self.params.res_y));
        if self.initial_population > 0 {
            self.agents.seed_population(
                &mut self.rngs,
                self.initial_population,
                &self.params,
                &mut self.rng,
            );
        }
    }

    /// `true` once [`start`](Self::start) has allocated the buffer.
    pub fn is_running(&self) -> bool {
        self.light.is_some()
    }

    /// Read-only view of the painted buffer for presentation.  `None`
    /// while Idle.
    pub fn light(&self) -> Option<&LightBuffer> {
        self.light.as_ref()
    }

    /// Destroy the entire population (the only way agents are removed).
    /// The light buffer keeps its paint and continues to decay.
    pub fn reset_population(&mut self) {
        self.agents.reset();
        self.rngs.reset();
    }

    // ── Input clock ───────────────────────────────────────────────────────

    /// One pointer-held input frame: spawn agents at `point` scaled by the
    /// frame's elapsed time.  Runs on the host's variable-rate clock,
    /// strictly between fixed ticks.  Returns the number spawned (0 once
    /// the population cap is reached — overflow is clamped, not an error).
    pub fn on_input_frame(&mut self, point: Vec2, frame_dt: f32) -> usize {
        self.agents
            .spawn_at_point(&mut self.rngs, point, frame_dt, &self.params, &mut self.rng)
    }

    // ── Fixed clock ───────────────────────────────────────────────────────

    /// Execute one fixed tick: kinematics dispatch, paint dispatch, commit.
    ///
    /// `source` is this tick's scene texture (or `None`).  The paint
    /// kernel reads the *returned* kinematics states, not the store — the
    /// dispatch has fully completed before painting starts, which is the
    /// producer→consumer barrier between the two kernels.
    pub fn tick(&mut self, source: Option<&SourceTexture>) -> SimResult<TickOutcome> {
        let Some(light) = self.light.as_mut() else {
            return Ok(TickOutcome::NoBuffer);
        };
        if self.agents.is_empty() {
            return Ok(TickOutcome::EmptyPopulation);
        }

        let dt = self.params.fixed_dt;
        let moved = step_all(&self.agents, &mut self.rngs, &self.params, dt);

        self.kernel
            .step(light, &moved, &self.brush, source, self.clock.elapsed_secs());

        // The kernel preserves population size, so this cannot mismatch;
        // the boundary stays checked regardless.
        self.agents.replace_all(&moved)?;
        self.clock.advance();
        Ok(TickOutcome::Stepped)
    }

    /// Drive `n` fixed ticks against a presentation adapter, invoking
    /// observer hooks at each tick boundary.
    ///
    /// The adapter's source texture is pulled fresh every tick and the
    /// painted buffer is pushed back after every executed tick.
    pub fn run_ticks<P, O>(&mut self, n: u64, presenter: &mut P, observer: &mut O) -> SimResult<()>
    where
        P: PresentationAdapter,
        O: SimObserver,
    {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);

            let outcome = self.tick(presenter.source())?;
            match outcome {
                TickOutcome::Stepped => {
                    observer.on_tick_end(now, self.agents.count);
                    if let Some(light) = self.light.as_ref() {
                        presenter.present(light);
                        let interval = self.params.snapshot_interval_ticks;
                        if interval > 0 && now.0.is_multiple_of(interval) {
                            observer.on_snapshot(now, light, &self.agents);
                        }
                    }
                }
                skipped => observer.on_tick_skipped(now, skipped),
            }
        }
        Ok(())
    }
}
