use ec_core::{ActorId, MoveRequestId, Vec3};

/// Outbound movement interface used by the controller.
///
/// Requests are fire-and-forget: the returned id is the only link to the
/// completion that arrives later.
pub trait Navigator {
    /// Ask `unit` to move to `destination`.
    fn move_to_location(&mut self, unit: ActorId, destination: Vec3) -> MoveRequestId;

    /// Toggle local avoidance for `unit`.
    fn set_avoidance_enabled(&mut self, unit: ActorId, enabled: bool);
}
