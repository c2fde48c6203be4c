//! `brush-output` — recording writers for headless runs.
//!
//! Two kinds of output, both driven by [`SimOutputObserver`] (a
//! `brush_sim::SimObserver`):
//!
//! | File                  | Contents                                   |
//! |-----------------------|--------------------------------------------|
//! | `agent_snapshots.csv` | one row per agent per snapshot tick        |
//! | `tick_summaries.csv`  | one row per executed tick                  |
//! | `frame_NNNNNN.ppm`    | the light buffer at each snapshot tick     |
//!
//! CSV output goes through the [`OutputWriter`] trait so other backends can
//! slot in; frame dumps are optional and enabled with
//! [`SimOutputObserver::with_frames`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use brush_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &params).with_frames("./output");
//! sim.run_ticks(n, &mut presenter, &mut obs)?;
//! obs.on_sim_end(sim.clock.current_tick);          // flush
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod ppm;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
