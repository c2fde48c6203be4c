//! The paint accumulation kernel: decay → diffuse → source blend → stamp.

use brush_agent::AgentState;
use brush_core::rng::MIXING_CONSTANT;
use brush_core::{Rgba, SimParams};

use crate::{BrushTexture, LightBuffer, SourceTexture};

/// The per-tick update of the light buffer.
///
/// Holds the paint-side parameters copied out of [`SimParams`] so the hot
/// loops read plain fields.  Stateless between ticks — all persistent
/// state lives in the [`LightBuffer`].
pub struct PaintKernel {
    diffuse:    f32,
    decay:      f32,
    acc_mult:   f32,
    agent_rad:  f32,
    base_color: Rgba,
    seed:       u64,
}

impl PaintKernel {
    pub fn new(params: &SimParams) -> Self {
        Self {
            diffuse:    params.diffuse,
            decay:      params.decay,
            acc_mult:   params.acc_mult,
            agent_rad:  params.agent_rad,
            base_color: params.base_color,
            seed:       params.seed,
        }
    }

    /// Run one full paint tick.
    ///
    /// `agents` must be the *post-kinematics* states — the driver calls
    /// this only after the kinematics dispatch has completed, which is the
    /// producer→consumer barrier between the two kernels.  `time_secs`
    /// phases the stamp jitter and comes from the fixed simulation clock.
    pub fn step(
        &self,
        light:     &mut LightBuffer,
        agents:    &[AgentState],
        brush:     &BrushTexture,
        source:    Option<&SourceTexture>,
        time_secs: f32,
    ) {
        self.decay_diffuse(light, source);
        self.stamp(light, agents, brush, time_secs);
    }

    // ── Pass 1: gather ────────────────────────────────────────────────────

    /// Decay, diffuse, and source-blend every pixel.
    ///
    /// Reads the front plane, writes the scratch plane, then swaps — every
    /// pixel sees the same pre-tick state no matter the processing order,
    /// which is what lets rows run in parallel.  Decay applies before
    /// diffusion (to the neighbours as well, so the stencil blends values
    /// from a single consistent point in time).  A source texture whose
    /// dimensions do not match the buffer is ignored for the tick.
    fn decay_diffuse(&self, light: &mut LightBuffer, source: Option<&SourceTexture>) {
        let width = light.width();
        let height = light.height();
        if width == 0 || height == 0 {
            return;
        }
        let source = source.filter(|s| s.width() == width && s.height() == height);

        let keep = 1.0 - self.decay;
        let diffuse = self.diffuse;
        let (front, back) = light.planes_mut();

        let gather_row = |y: usize, row: &mut [Rgba]| {
            let up = y.saturating_sub(1);
            let down = (y + 1).min(height - 1);
            for (x, out) in row.iter_mut().enumerate() {
                let left = x.saturating_sub(1);
                let right = (x + 1).min(width - 1);

                let center = front[y * width + x] * keep;
                let mean = (front[up * width + x]
                    + front[down * width + x]
                    + front[y * width + left]
                    + front[y * width + right])
                    * (0.25 * keep);

                let mut c = center + (mean - center) * diffuse;
                if let Some(src) = source {
                    c += src.texel(x, y);
                }
                *out = c;
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            back.par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| gather_row(y, row));
        }

        #[cfg(not(feature = "parallel"))]
        {
            back.chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| gather_row(y, row));
        }

        light.swap_planes();
    }

    // ── Pass 2: stamp ─────────────────────────────────────────────────────

    /// Deposit every agent's brush footprint.
    ///
    /// Influence is bounded to the `2·agent_rad + 1` window around each
    /// agent — O(agents × agent_rad²) writes instead of scanning every
    /// pixel against every agent.  Window pixels outside the buffer or
    /// outside the footprint disc are clipped, never an error.  Runs after
    /// the gather pass on the driver thread; the window loops are small
    /// enough that scattering sequentially costs less than synchronising
    /// concurrent writes would.
    fn stamp(
        &self,
        light:     &mut LightBuffer,
        agents:    &[AgentState],
        brush:     &BrushTexture,
        time_secs: f32,
    ) {
        if agents.is_empty() || brush.is_empty() {
            return;
        }
        let width = light.width() as i64;
        let height = light.height() as i64;
        let rad = self.agent_rad;
        let rad_sq = rad * rad;
        let r = rad.ceil() as i64;
        let inv_diameter = 0.5 / rad.max(f32::EPSILON);
        let cells = light.front_mut();

        for agent in agents {
            let px = agent.pos.x.round() as i64;
            let py = agent.pos.y.round() as i64;

            for dy in -r..=r {
                let y = py + dy;
                if y < 0 || y >= height {
                    continue;
                }
                for dx in -r..=r {
                    let x = px + dx;
                    if x < 0 || x >= width {
                        continue;
                    }
                    let off_x = x as f32 - agent.pos.x;
                    let off_y = y as f32 - agent.pos.y;
                    if off_x * off_x + off_y * off_y > rad_sq {
                        continue;
                    }

                    let weight = brush.sample(0.5 + off_x * inv_diameter, 0.5 + off_y * inv_diameter);
                    if weight <= 0.0 {
                        continue;
                    }
                    let jitter = self.jitter(x, y, time_secs);
                    cells[(y * width + x) as usize] +=
                        self.base_color * (weight * jitter * self.acc_mult);
                }
            }
        }
    }

    /// Stateless per-pixel stamp jitter in `[0, 1)`.
    ///
    /// A splitmix-style hash of (pixel, tick time, run seed).  No RNG state
    /// is consumed, so stamp order — and the `parallel` feature — cannot
    /// change the result, and a fixed seed reproduces the same grain.
    fn jitter(&self, x: i64, y: i64, time_secs: f32) -> f32 {
        let mut h = self.seed
            ^ (x as u64).wrapping_mul(MIXING_CONSTANT)
            ^ (y as u64).wrapping_mul(0xc2b2_ae3d_27d4_eb4f);
        h ^= (time_secs.to_bits() as u64).wrapping_mul(0x9d4d_2b88_fa8c_6c45);
        h ^= h >> 30;
        h = h.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        h ^= h >> 27;
        h = h.wrapping_mul(0x94d0_49bb_1331_11eb);
        h ^= h >> 31;
        (h >> 40) as f32 / (1u64 << 24) as f32
    }
}
