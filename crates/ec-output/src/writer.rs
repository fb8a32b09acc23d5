//! The `TraceWriter` trait implemented by trace backends.

use crate::{EventRow, OutputResult, SnapshotRow};

/// Sink for controller traces.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with [`take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write a batch of state snapshots.
    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()>;

    /// Write one journal entry.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
