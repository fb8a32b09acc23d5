use std::fmt;

use ec_core::{Aabb, ActorId, Vec3};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player,
    Objective,
    Unit,
    Prop,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActorKind::Player    => "player",
            ActorKind::Objective => "objective",
            ActorKind::Unit      => "unit",
            ActorKind::Prop      => "prop",
        })
    }
}

/// One actor in the [`Arena`][crate::Arena].
#[derive(Clone, Debug)]
pub struct ActorRecord {
    pub id:          ActorId,
    pub kind:        ActorKind,
    pub name:        String,
    pub location:    Vec3,
    /// Boxes tagged "Guard" on this actor; only objectives normally have any.
    pub guard_areas: Vec<Aabb>,
}
