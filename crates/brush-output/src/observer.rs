//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use std::path::PathBuf;

use brush_agent::AgentStore;
use brush_core::{SimParams, Tick};
use brush_paint::LightBuffer;
use brush_sim::SimObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, ppm};

/// A [`SimObserver`] that records tick summaries, agent snapshots, and
/// (optionally) PPM frames of the light buffer.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:        W,
    fixed_dt_secs: f32,
    frame_dir:     Option<PathBuf>,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `params` for the
    /// tick → seconds conversion.
    pub fn new(writer: W, params: &SimParams) -> Self {
        Self {
            writer,
            fixed_dt_secs: params.fixed_dt,
            frame_dir: None,
            last_error: None,
        }
    }

    /// Also dump a PPM image of the light buffer at every snapshot tick.
    pub fn with_frames(mut self, dir: impl Into<PathBuf>) -> Self {
        self.frame_dir = Some(dir.into());
        self
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, population: usize) {
        let row = TickSummaryRow {
            tick: tick.0,
            sim_time_secs: tick.0 as f32 * self.fixed_dt_secs,
            population: population as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, light: &LightBuffer, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = (0..agents.count)
            .map(|i| AgentSnapshotRow {
                agent_id: i as u32,
                tick: tick.0,
                pos_x: agents.pos[i].x,
                pos_y: agents.pos[i].y,
                vel_x: agents.vel[i].x,
                vel_y: agents.vel[i].y,
                at_goal: agents.at_goal[i] == 1,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        if let Some(dir) = self.frame_dir.clone() {
            let result = ppm::write_frame(&dir, tick, light).map(|_| ());
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
