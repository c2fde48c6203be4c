//! Integration tests for brush-sim.

use brush_core::{ParamsError, Rgba, SimParams, Tick, Vec2};
use brush_paint::{BrushTexture, LightBuffer, SourceTexture};

use crate::{
    NoopObserver, NoopPresenter, PresentationAdapter, Sim, SimBuilder, SimError, SimObserver,
    TickOutcome,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_params() -> SimParams {
    SimParams {
        res_x: 100,
        res_y: 100,
        max_agents: 32,
        agent_speed: 2.0,
        spawn_rate: 100.0,
        agent_rad: 3.0,
        goal_rad: 10.0,
        border: 20.0,
        seed: 42,
        fixed_dt: 0.02,
        snapshot_interval_ticks: 0,
        ..SimParams::default()
    }
}

fn running_sim(params: SimParams) -> Sim {
    let mut sim = SimBuilder::new(params, BrushTexture::radial(7))
        .build()
        .unwrap();
    sim.start();
    sim
}

/// Spawn a handful of agents through the input-clock path.
fn held_pointer(sim: &mut Sim, point: Vec2, frames: usize) -> usize {
    (0..frames).map(|_| sim.on_input_frame(point, 0.05)).sum()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_idle_with_valid_params() {
        let sim = SimBuilder::new(test_params(), BrushTexture::radial(7))
            .build()
            .unwrap();
        assert!(!sim.is_running());
        assert!(sim.light().is_none());
        assert!(sim.agents.is_empty());
    }

    #[test]
    fn invalid_params_rejected() {
        let params = SimParams { decay: 2.0, ..test_params() };
        let err = SimBuilder::new(params, BrushTexture::radial(7))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::Config(ParamsError::OutOfUnitRange { name: "decay", .. })
        ));
    }

    #[test]
    fn initial_population_seeded_at_start() {
        let mut sim = SimBuilder::new(test_params(), BrushTexture::radial(7))
            .initial_population(10)
            .build()
            .unwrap();
        assert!(sim.agents.is_empty(), "population appears at start(), not build()");

        sim.start();
        assert_eq!(sim.agents.count, 10);
        assert_eq!(sim.rngs.len(), 10);
        for i in 0..sim.agents.count {
            assert_eq!(sim.agents.pos[i], sim.params.center());
        }
    }

    #[test]
    fn initial_population_clamped_to_cap() {
        let mut sim = SimBuilder::new(test_params(), BrushTexture::radial(7))
            .initial_population(1_000)
            .build()
            .unwrap();
        sim.start();
        assert_eq!(sim.agents.count, sim.params.max_agents);
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_machine {
    use super::*;

    #[test]
    fn idle_tick_skips_with_no_buffer() {
        let mut sim = SimBuilder::new(test_params(), BrushTexture::radial(7))
            .build()
            .unwrap();
        assert_eq!(sim.tick(None).unwrap(), TickOutcome::NoBuffer);
        assert_eq!(sim.clock.current_tick, Tick(0), "skips do not advance the clock");
    }

    #[test]
    fn start_allocates_buffer_and_is_idempotent() {
        let mut sim = running_sim(test_params());
        assert!(sim.is_running());
        let light = sim.light().unwrap();
        assert_eq!(light.width(), 100);
        assert_eq!(light.height(), 100);

        held_pointer(&mut sim, Vec2::new(50.0, 50.0), 1);
        sim.start(); // second start must not clear anything
        assert!(!sim.agents.is_empty());
    }

    #[test]
    fn empty_population_tick_skips() {
        let mut sim = running_sim(test_params());
        assert_eq!(sim.tick(None).unwrap(), TickOutcome::EmptyPopulation);
        assert_eq!(sim.clock.current_tick, Tick(0));
    }

    #[test]
    fn stepped_tick_advances_clock() {
        let mut sim = running_sim(test_params());
        held_pointer(&mut sim, Vec2::new(50.0, 50.0), 1);

        assert_eq!(sim.tick(None).unwrap(), TickOutcome::Stepped);
        assert_eq!(sim.clock.current_tick, Tick(1));
    }

    #[test]
    fn reset_population_returns_to_empty_skips() {
        let mut sim = running_sim(test_params());
        held_pointer(&mut sim, Vec2::new(50.0, 50.0), 2);
        sim.tick(None).unwrap();
        let painted = sim.light().unwrap().total_energy();
        assert!(painted > 0.0);

        sim.reset_population();
        assert!(sim.agents.is_empty());
        assert_eq!(sim.tick(None).unwrap(), TickOutcome::EmptyPopulation);
        // Skipped ticks leave the buffer untouched.
        assert_eq!(sim.light().unwrap().total_energy(), painted);
    }
}

// ── Input clock ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod input_clock {
    use super::*;

    #[test]
    fn pointer_frames_spawn_at_rate() {
        let mut sim = running_sim(test_params());
        // 100 agents/sec * 0.05 s = 5 per frame.
        assert_eq!(sim.on_input_frame(Vec2::new(40.0, 60.0), 0.05), 5);
        assert_eq!(sim.agents.count, 5);
    }

    #[test]
    fn population_capped_across_frames() {
        let mut sim = running_sim(test_params());
        for _ in 0..50 {
            sim.on_input_frame(Vec2::new(40.0, 60.0), 0.05);
            assert!(sim.agents.count <= sim.params.max_agents);
        }
        assert_eq!(sim.agents.count, sim.params.max_agents);
        // At the cap: exactly zero spawned.
        assert_eq!(sim.on_input_frame(Vec2::new(40.0, 60.0), 1.0), 0);
    }

    #[test]
    fn spawning_while_idle_waits_for_start() {
        let mut sim = SimBuilder::new(test_params(), BrushTexture::radial(7))
            .build()
            .unwrap();
        assert!(sim.on_input_frame(Vec2::new(50.0, 50.0), 0.05) > 0);
        assert_eq!(sim.tick(None).unwrap(), TickOutcome::NoBuffer);

        sim.start();
        assert_eq!(sim.tick(None).unwrap(), TickOutcome::Stepped);
    }
}

// ── Tick pipeline ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_pipeline {
    use super::*;

    #[test]
    fn paint_appears_near_spawn_point() {
        let mut sim = running_sim(test_params());
        let point = Vec2::new(50.0, 50.0);
        held_pointer(&mut sim, point, 1);
        sim.tick(None).unwrap();

        let light = sim.light().unwrap();
        assert!(light.total_energy() > 0.0);

        // One 0.02 s step moves an agent at most speed*dt = 0.04 px, so all
        // paint sits within the stamp radius (+1 rounding) of the pointer.
        let reach = sim.params.agent_rad + 1.0;
        let mut far_energy = 0.0;
        for y in 0..light.height() {
            for x in 0..light.width() {
                let dx = x as f32 - point.x;
                let dy = y as f32 - point.y;
                if dx * dx + dy * dy > reach * reach {
                    far_energy += light.get(x, y).energy();
                }
            }
        }
        assert_eq!(far_energy, 0.0, "paint leaked beyond the stamp footprint");
    }

    #[test]
    fn invariants_hold_over_a_long_run() {
        let mut sim = running_sim(test_params());
        held_pointer(&mut sim, Vec2::new(30.0, 70.0), 4);

        for _ in 0..500 {
            sim.tick(None).unwrap();
            for i in 0..sim.agents.count {
                assert!(sim.agents.vel[i].length() <= sim.params.agent_speed + 1e-4);
                assert!(sim.agents.pos[i].x >= 0.0 && sim.agents.pos[i].x <= 100.0);
                assert!(sim.agents.pos[i].y >= 0.0 && sim.agents.pos[i].y <= 100.0);
            }
        }
        // Kernels never change population size.
        assert_eq!(sim.agents.count, 20);
    }

    #[test]
    fn source_texture_feeds_the_buffer() {
        let mut sim = running_sim(test_params());
        held_pointer(&mut sim, Vec2::new(50.0, 50.0), 1);

        let mut source = SourceTexture::new(100, 100);
        source.set_texel(10, 90, Rgba::rgb(0.5, 0.0, 0.0));
        sim.tick(Some(&source)).unwrap();

        // Far from any agent, so only the source can have put paint there.
        assert!(sim.light().unwrap().get(10, 90).r > 0.0);
    }

    #[test]
    fn identically_seeded_runs_are_identical() {
        let run = |seed: u64| {
            let params = SimParams { seed, ..test_params() };
            let mut sim = running_sim(params);
            for frame in 0..100 {
                if frame % 3 == 0 {
                    sim.on_input_frame(Vec2::new(25.0, 75.0), 0.03);
                }
                sim.tick(None).unwrap();
            }
            sim
        };

        let a = run(7);
        let b = run(7);
        assert_eq!(a.agents.count, b.agents.count);
        for i in 0..a.agents.count {
            assert_eq!(a.agents.snapshot(i), b.agents.snapshot(i));
        }
        assert_eq!(a.light().unwrap().cells(), b.light().unwrap().cells());

        let c = run(8);
        assert_ne!(
            a.light().unwrap().cells(),
            c.light().unwrap().cells(),
            "different seeds should paint differently"
        );
    }
}

// ── run_ticks, observers, presentation ────────────────────────────────────────

#[cfg(test)]
mod run_and_observe {
    use super::*;

    /// Observer that counts hook invocations.
    #[derive(Default)]
    struct HookCounter {
        starts:    usize,
        ends:      usize,
        skips:     usize,
        snapshots: usize,
        last_skip: Option<TickOutcome>,
    }

    impl SimObserver for HookCounter {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _t: Tick, _population: usize) {
            self.ends += 1;
        }
        fn on_tick_skipped(&mut self, _t: Tick, outcome: TickOutcome) {
            self.skips += 1;
            self.last_skip = Some(outcome);
        }
        fn on_snapshot(&mut self, _t: Tick, _l: &LightBuffer, _a: &brush_agent::AgentStore) {
            self.snapshots += 1;
        }
    }

    /// Presenter that counts frames and serves a fixed source texture.
    struct CountingPresenter {
        source: SourceTexture,
        frames: usize,
    }

    impl PresentationAdapter for CountingPresenter {
        fn source(&mut self) -> Option<&SourceTexture> {
            Some(&self.source)
        }
        fn present(&mut self, light: &LightBuffer) {
            assert!(light.width() > 0);
            self.frames += 1;
        }
    }

    #[test]
    fn hooks_fire_once_per_tick() {
        let mut sim = running_sim(test_params());
        held_pointer(&mut sim, Vec2::new(50.0, 50.0), 1);

        let mut obs = HookCounter::default();
        sim.run_ticks(7, &mut NoopPresenter, &mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.skips, 0);
    }

    #[test]
    fn skipped_ticks_reported_not_ended() {
        let mut sim = running_sim(test_params()); // running but empty
        let mut obs = HookCounter::default();
        sim.run_ticks(3, &mut NoopPresenter, &mut obs).unwrap();
        assert_eq!(obs.starts, 3);
        assert_eq!(obs.ends, 0);
        assert_eq!(obs.skips, 3);
        assert_eq!(obs.last_skip, Some(TickOutcome::EmptyPopulation));
    }

    #[test]
    fn snapshots_follow_the_configured_interval() {
        let params = SimParams { snapshot_interval_ticks: 4, ..test_params() };
        let mut sim = running_sim(params);
        held_pointer(&mut sim, Vec2::new(50.0, 50.0), 1);

        let mut obs = HookCounter::default();
        sim.run_ticks(12, &mut NoopPresenter, &mut obs).unwrap();
        // Executed ticks 0..12: snapshots at T0, T4, T8.
        assert_eq!(obs.snapshots, 3);
    }

    #[test]
    fn presenter_receives_every_executed_frame() {
        let mut sim = running_sim(test_params());
        held_pointer(&mut sim, Vec2::new(50.0, 50.0), 1);

        let mut presenter = CountingPresenter {
            source: SourceTexture::new(100, 100),
            frames: 0,
        };
        sim.run_ticks(5, &mut presenter, &mut NoopObserver).unwrap();
        assert_eq!(presenter.frames, 5);
    }
}
