//! Pool observer trait for progress reporting and trace collection.

use ec_core::ActorId;

use crate::{ControllerEvent, StateSnapshot};

/// Callbacks invoked by [`ControllerPool::step`][crate::ControllerPool::step]
/// and [`ControllerPool::run`][crate::ControllerPool::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: state-change printer
///
/// ```rust,ignore
/// struct StatePrinter;
///
/// impl ControllerObserver for StatePrinter {
///     fn on_event(&mut self, step: u64, unit: ActorId, event: &ControllerEvent) {
///         if let ControllerEvent::StateChanged { .. } = event {
///             println!("step {step}: {unit} {event}");
///         }
///     }
/// }
/// ```
pub trait ControllerObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called once per journal entry, in the order each controller recorded
    /// them.  Controllers are visited in possession order.
    fn on_event(&mut self, _step: u64, _unit: ActorId, _event: &ControllerEvent) {}

    /// Called at snapshot intervals with one row per controller that has an
    /// AI state store.
    fn on_snapshot(&mut self, _step: u64, _rows: &[StateSnapshot]) {}

    /// Called once after the final step of [`run`][crate::ControllerPool::run].
    fn on_run_end(&mut self, _final_step: u64) {}
}

/// A [`ControllerObserver`] that does nothing.
pub struct NoopObserver;

impl ControllerObserver for NoopObserver {}
