//! headless — drives the painting simulation without a window.
//!
//! Plays back a synthetic pointer gesture (a slow lissajous sweep, held
//! for the first few seconds), ticks the fixed-step loop, and records CSV
//! trajectories plus PPM frames under `output/headless/`.  Open the
//! `frame_*.ppm` files in any image viewer to watch the painting evolve.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use brush_core::{Rgba, SimParams, Vec2};
use brush_output::{CsvWriter, SimOutputObserver};
use brush_paint::{BrushTexture, LightBuffer, SourceTexture};
use brush_sim::{PresentationAdapter, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const RES_X:             u32   = 480;
const RES_Y:             u32   = 270;
const MAX_AGENTS:        usize = 400;
const TOTAL_TICKS:       u64   = 600;   // 12 s of simulated painting
const FIXED_DT:          f32   = 0.02;  // 50 ticks/sec
const POINTER_HELD_SECS: f32   = 6.0;
const SNAPSHOT_INTERVAL: u64   = 50;
const OUTPUT_DIR:        &str  = "output/headless";

// ── Synthetic input ───────────────────────────────────────────────────────────

/// Pointer position at simulated time `t`: a lissajous sweep through the
/// middle two thirds of the canvas.
fn pointer_at(t: f32) -> Vec2 {
    let cx = RES_X as f32 * 0.5;
    let cy = RES_Y as f32 * 0.5;
    Vec2::new(
        cx + cx * 0.6 * (t * 0.7).sin(),
        cy + cy * 0.6 * (t * 1.1).cos(),
    )
}

// ── Presentation adapter ──────────────────────────────────────────────────────

/// Stands in for the camera + display: serves a faint static glow as the
/// scene texture and counts presented frames.
struct ScenePresenter {
    source: SourceTexture,
    frames: usize,
}

impl ScenePresenter {
    /// A dim radial glow centered on the canvas — just enough for the
    /// source-blend path to leave a visible vignette under the paint.
    fn new() -> Self {
        let mut source = SourceTexture::new(RES_X, RES_Y);
        let center = Vec2::new(RES_X as f32 * 0.5, RES_Y as f32 * 0.5);
        let max_dist = center.length();
        for y in 0..RES_Y as usize {
            for x in 0..RES_X as usize {
                let d = Vec2::new(x as f32, y as f32).distance(center) / max_dist;
                let glow = 0.002 * (1.0 - d).max(0.0);
                source.set_texel(x, y, Rgba::rgb(glow, glow, glow * 2.0));
            }
        }
        Self { source, frames: 0 }
    }
}

impl PresentationAdapter for ScenePresenter {
    fn source(&mut self) -> Option<&SourceTexture> {
        Some(&self.source)
    }

    fn present(&mut self, _light: &LightBuffer) {
        self.frames += 1;
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let out = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out)?;

    let params = SimParams {
        res_x: RES_X,
        res_y: RES_Y,
        max_agents: MAX_AGENTS,
        spawn_rate: 200.0,
        agent_speed: 40.0,
        acc_mult: 30.0,
        agent_rad: 4.0,
        goal_rad: 8.0,
        border: 24.0,
        base_color: Rgba::rgb(0.9, 0.55, 0.2),
        fixed_dt: FIXED_DT,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL,
        ..SimParams::default()
    };
    fs::write(out.join("params.json"), serde_json::to_string_pretty(&params)?)?;

    println!("=== brushsim headless — {RES_X}x{RES_Y}, up to {MAX_AGENTS} sprites ===");

    let mut sim = SimBuilder::new(params.clone(), BrushTexture::radial(9)).build()?;
    sim.start();

    let writer = CsvWriter::new(out)?;
    let mut obs = SimOutputObserver::new(writer, &params).with_frames(out);
    let mut presenter = ScenePresenter::new();

    let t_run = Instant::now();
    for tick in 0..TOTAL_TICKS {
        let t = tick as f32 * FIXED_DT;
        if t < POINTER_HELD_SECS {
            sim.on_input_frame(pointer_at(t), FIXED_DT);
        }
        sim.run_ticks(1, &mut presenter, &mut obs)?;

        if tick % 100 == 0 {
            let energy = sim.light().map(|l| l.total_energy()).unwrap_or(0.0);
            println!(
                "{}: {:4} sprites, buffer energy {:10.1}",
                sim.clock, sim.agents.count, energy
            );
        }
    }
    let elapsed = t_run.elapsed().as_secs_f64();

    obs.on_sim_end(sim.clock.current_tick);
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!("Presented {} frames in {elapsed:.3}s", presenter.frames);
    println!("Output written to {OUTPUT_DIR}/");
    Ok(())
}
