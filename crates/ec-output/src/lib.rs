//! `ec-output`: trace output for controller runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`row`]      | `SnapshotRow`, `EventRow`: flat rows written by backends         |
//! | [`writer`]   | `TraceWriter` trait                                              |
//! | [`csv`]      | `CsvTraceWriter`: `state_snapshots.csv`, `controller_events.csv` |
//! | [`observer`] | `TraceObserver<W>`: `ControllerObserver` → `TraceWriter`         |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                                 |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ec_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! pool.run(200, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{EventRow, SnapshotRow};
pub use writer::TraceWriter;
