//! Top-level simulation configuration.
//!
//! `SimParams` is set once before the simulation starts running; no live
//! reconfiguration happens mid-run.  All distances and radii are in canvas
//! pixels, rates are per second of simulated time.

use rand::Rng;

use crate::{ParamsError, Rgba, Vec2};

/// Immutable-per-run tuning for the painting simulation.
///
/// Typically built from [`SimParams::default`] and adjusted field-by-field,
/// or loaded from a JSON/TOML file by the host (with the `serde` feature).
/// Validated once by the driver builder; see [`validate`](Self::validate).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Light-buffer width in pixels.
    pub res_x: u32,
    /// Light-buffer height in pixels.
    pub res_y: u32,

    /// Hard cap on the live population.  Spawning clamps against this.
    pub max_agents: usize,

    /// Neighbour-blend coefficient per tick, in `[0, 1]`.
    pub diffuse: f32,
    /// Exponential fade coefficient per tick, in `[0, 1]`.
    /// `1.0` clears the previous frame entirely before new paint lands.
    pub decay: f32,

    /// Velocity magnitude cap, pixels/sec.
    pub agent_speed: f32,
    /// Acceleration multiplier toward the goal; also scales stamp intensity.
    pub acc_mult: f32,

    /// Agents spawned per second of pointer-held input.
    pub spawn_rate: f32,
    /// Radius of the stamped brush footprint, pixels.
    pub agent_rad: f32,
    /// Arrival radius — an agent within this distance of its goal has arrived.
    pub goal_rad: f32,
    /// Margin keeping sampled goals away from the canvas edges.
    pub border: f32,

    /// Color deposited by stamps, scaled by brush weight and jitter.
    pub base_color: Rgba,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Seconds of simulated time per fixed tick.
    pub fixed_dt: f32,

    /// Invoke the observer snapshot hook every N executed ticks; 0 = never.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimParams {
    /// The reference tuning for a full-HD canvas.
    fn default() -> Self {
        Self {
            res_x: 1920,
            res_y: 1080,
            max_agents: 1000,
            diffuse: 0.1,
            decay: 0.2,
            agent_speed: 2.0,
            acc_mult: 1.0,
            spawn_rate: 10_000.0,
            agent_rad: 3.0,
            goal_rad: 10.0,
            border: 50.0,
            base_color: Rgba::rgb(0.9, 0.6, 0.2),
            seed: 42,
            fixed_dt: 0.02,
            snapshot_interval_ticks: 0,
        }
    }
}

impl SimParams {
    /// Reject invalid configurations before any simulation state exists.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.res_x == 0 || self.res_y == 0 {
            return Err(ParamsError::ZeroDimension(self.res_x, self.res_y));
        }
        if self.max_agents == 0 {
            return Err(ParamsError::ZeroMaxAgents);
        }
        if self.fixed_dt <= 0.0 {
            return Err(ParamsError::NonPositiveDt(self.fixed_dt));
        }
        for (name, value) in [
            ("agent_speed", self.agent_speed),
            ("acc_mult", self.acc_mult),
            ("spawn_rate", self.spawn_rate),
            ("agent_rad", self.agent_rad),
            ("goal_rad", self.goal_rad),
            ("border", self.border),
        ] {
            if value < 0.0 {
                return Err(ParamsError::Negative { name, value });
            }
        }
        for (name, value) in [("diffuse", self.diffuse), ("decay", self.decay)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::OutOfUnitRange { name, value });
            }
        }
        // The widest inset used by goal sampling must leave an interior.
        let inset = self.goal_inset();
        if 2.0 * inset >= self.res_x.min(self.res_y) as f32 {
            return Err(ParamsError::InsetTooLarge {
                inset,
                res_x: self.res_x,
                res_y: self.res_y,
            });
        }
        Ok(())
    }

    /// Canvas center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.res_x as f32 * 0.5, self.res_y as f32 * 0.5)
    }

    /// Edge inset applied to goals of the pre-seeded population and of
    /// arrival reassignment.
    #[inline]
    pub fn goal_inset(&self) -> f32 {
        self.border + self.goal_rad
    }

    /// Edge inset applied to goals of pointer-spawned agents — half the
    /// goal radius, letting fresh sprites aim slightly closer to the rim.
    #[inline]
    pub fn spawn_goal_inset(&self) -> f32 {
        self.border + self.goal_rad * 0.5
    }

    /// Sample a goal uniformly from the canvas interior inset by `inset`
    /// on every side.
    pub fn sample_goal<R: Rng>(&self, inset: f32, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.gen_range(inset..self.res_x as f32 - inset),
            rng.gen_range(inset..self.res_y as f32 - inset),
        )
    }

    /// Clamp a position to the addressable canvas `[0, res_x] x [0, res_y]`.
    #[inline]
    pub fn clamp_to_canvas(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(0.0, self.res_x as f32),
            p.y.clamp(0.0, self.res_y as f32),
        )
    }
}
