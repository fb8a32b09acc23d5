//! `TraceObserver<W>`: bridges `ControllerObserver` to a `TraceWriter`.

use ec_controller::{ControllerEvent, ControllerObserver, StateSnapshot};
use ec_core::ActorId;

use crate::row::{EventRow, SnapshotRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`ControllerObserver`] that writes snapshots and journal entries to any
/// [`TraceWriter`].
///
/// Observer methods have no return value, so write errors are stored.  After
/// `pool.run()` returns, check with [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    events:     u64,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, events: 0, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Journal entries seen so far.
    pub fn events_written(&self) -> u64 {
        self.events
    }

    /// Snapshot rows seen so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> ControllerObserver for TraceObserver<W> {
    fn on_event(&mut self, step: u64, unit: ActorId, event: &ControllerEvent) {
        self.events += 1;
        let result = self.writer.write_event(&EventRow::new(step, unit, event));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, _step: u64, rows: &[StateSnapshot]) {
        if rows.is_empty() {
            return;
        }
        let rows: Vec<SnapshotRow> = rows.iter().map(SnapshotRow::from).collect();
        self.rows += rows.len() as u64;
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_step: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
