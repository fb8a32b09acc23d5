//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `state_snapshots.csv`
//! - `controller_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{EventRow, OutputResult, SnapshotRow};

pub const SNAPSHOT_FILE: &str = "state_snapshots.csv";
pub const EVENT_FILE: &str = "controller_events.csv";

/// Writes controller traces to two CSV files.
pub struct CsvTraceWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record([
            "step",
            "unit",
            "ai_state",
            "current_enemy",
            "have_los",
            "enemy_in_aggro_range",
            "enemy_in_guard_area",
            "forced_move",
            "x",
            "y",
            "z",
        ])?;

        let mut events = Writer::from_path(dir.join(EVENT_FILE))?;
        events.write_record(["step", "unit", "event", "detail"])?;

        Ok(Self { snapshots, events, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.unit.to_string(),
                row.ai_state.to_owned(),
                row.current_enemy.to_string(),
                (row.have_los as u8).to_string(),
                (row.enemy_in_aggro_range as u8).to_string(),
                (row.enemy_in_guard_area as u8).to_string(),
                (row.forced_move as u8).to_string(),
                format!("{:.2}", row.x),
                format!("{:.2}", row.y),
                format!("{:.2}", row.z),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record([
            row.step.to_string().as_str(),
            row.unit.to_string().as_str(),
            row.event,
            row.detail.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
