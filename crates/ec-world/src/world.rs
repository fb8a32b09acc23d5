use ec_core::{Aabb, ActorId, Vec3};

use crate::ActorKind;

/// Read-only world queries used by possession and perception.
///
/// Shared across controllers (and across Rayon workers in the pool), hence
/// `Send + Sync`.
pub trait World: Send + Sync {
    /// Every actor of `kind`, in registration order.
    fn actors(&self, kind: ActorKind) -> Vec<ActorId>;

    fn actor_name(&self, actor: ActorId) -> Option<&str>;

    /// `None` if the actor no longer exists.
    fn actor_location(&self, actor: ActorId) -> Option<Vec3>;

    /// `true` if nothing blocks the segment `from → to`.
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool;

    /// Guard-tagged boxes attached to `objective`.  Empty if it has none or
    /// does not exist.
    fn guard_areas(&self, objective: ActorId) -> &[Aabb];
}
