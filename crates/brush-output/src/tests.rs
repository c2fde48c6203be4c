//! Integration tests for brush-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            pos_x:   agent_id as f32 * 10.0,
            pos_y:   5.0,
            vel_x:   1.5,
            vel_y:   -0.5,
            at_goal: false,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, sim_time_secs: tick as f32 * 0.02, population: 7 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "pos_x", "pos_y", "vel_x", "vel_y", "at_goal"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "sim_time_secs", "population"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0");  // agent_id
        assert_eq!(&read_rows[0][1], "5");  // tick
        assert_eq!(&read_rows[1][2], "10"); // pos_x of agent 1
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3"); // tick
        assert_eq!(&read_rows[0][2], "7"); // population
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }
}

#[cfg(test)]
mod ppm_tests {
    use brush_core::{Rgba, Tick};
    use brush_paint::LightBuffer;
    use tempfile::TempDir;

    use crate::ppm;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn frame_has_p6_header_and_full_payload() {
        let dir = tmp();
        let mut light = LightBuffer::new(8, 4);
        light.set(2, 1, Rgba::rgb(1.0, 0.5, 0.0));

        let path = ppm::write_frame(dir.path(), Tick(12), &light).unwrap();
        assert_eq!(path.file_name().unwrap(), "frame_000012.ppm");

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P6\n8 4\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 8 * 4 * 3);
    }

    #[test]
    fn components_clamp_to_display_range() {
        let dir = tmp();
        let mut light = LightBuffer::new(2, 1);
        light.set(0, 0, Rgba::rgb(5.0, -1.0, 0.5));

        let path = ppm::write_frame(dir.path(), Tick(0), &light).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let pixels = &bytes[bytes.len() - 6..];
        assert_eq!(pixels[0], 255); // over-bright clamps high
        assert_eq!(pixels[1], 0);   // negative clamps to zero
        assert_eq!(pixels[2], 128); // 0.5 * 255, rounded
    }
}

#[cfg(test)]
mod observer_tests {
    use brush_core::{SimParams, Vec2};
    use brush_paint::BrushTexture;
    use brush_sim::{NoopPresenter, SimBuilder, SimObserver};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn small_params() -> SimParams {
        SimParams {
            res_x: 64,
            res_y: 64,
            max_agents: 8,
            spawn_rate: 100.0,
            goal_rad: 5.0,
            border: 10.0,
            snapshot_interval_ticks: 2,
            ..SimParams::default()
        }
    }

    #[test]
    fn integration_records_summaries_snapshots_and_frames() {
        let dir = tmp();
        let params = small_params();

        let mut sim = SimBuilder::new(params.clone(), BrushTexture::radial(5))
            .build()
            .unwrap();
        sim.start();
        sim.on_input_frame(Vec2::new(32.0, 32.0), 0.05); // 5 agents

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &params).with_frames(dir.path());

        sim.run_ticks(6, &mut NoopPresenter, &mut obs).unwrap();
        obs.on_sim_end(sim.clock.current_tick);
        assert!(obs.take_error().is_none());

        // Six executed ticks → six summary rows.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);

        // Snapshots at T0, T2, T4 → 3 * 5 agent rows.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 15);

        // One frame per snapshot tick.
        assert!(dir.path().join("frame_000000.ppm").exists());
        assert!(dir.path().join("frame_000002.ppm").exists());
        assert!(dir.path().join("frame_000004.ppm").exists());
        assert!(!dir.path().join("frame_000001.ppm").exists());
    }

    #[test]
    fn missing_frame_dir_surfaces_one_error() {
        let dir = tmp();
        let params = small_params();

        let mut sim = SimBuilder::new(params.clone(), BrushTexture::radial(5))
            .build()
            .unwrap();
        sim.start();
        sim.on_input_frame(Vec2::new(32.0, 32.0), 0.05);

        let writer = CsvWriter::new(dir.path()).unwrap();
        let missing = dir.path().join("does-not-exist");
        let mut obs = SimOutputObserver::new(writer, &params).with_frames(&missing);

        sim.run_ticks(4, &mut NoopPresenter, &mut obs).unwrap();
        assert!(obs.take_error().is_some(), "frame write into a missing dir must be reported");
        assert!(obs.take_error().is_none(), "error is taken once");
    }
}
