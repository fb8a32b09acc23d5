//! Per-unit movement state.

use ec_core::{MoveRequestId, Vec3};

/// Movement state of one placed unit.
///
/// A unit is either **idle** (`request == None`) or **moving** toward
/// `destination` under `request`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveState {
    pub position:    Vec3,
    pub destination: Vec3,
    pub request:     Option<MoveRequestId>,
}

impl MoveState {
    #[inline]
    pub fn idle(position: Vec3) -> Self {
        Self { position, destination: position, request: None }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.request.is_some()
    }

    /// Move up to `max_step` toward the destination.  Returns `true` once the
    /// destination is reached.
    pub fn step(&mut self, max_step: f32) -> bool {
        let delta = self.destination - self.position;
        let remaining = delta.length();
        if remaining <= max_step {
            self.position = self.destination;
            true
        } else {
            self.position += delta * (max_step / remaining);
            false
        }
    }
}
