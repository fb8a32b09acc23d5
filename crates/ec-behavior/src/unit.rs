//! The capability a unit must expose to be driven by an enemy controller.

use ec_core::ActorId;

use crate::BehaviorAsset;

/// A unit that can be possessed.
///
/// The controller checks this capability once at possession: a unit whose
/// [`unit_behavior`](Self::unit_behavior) is `None` is bound but gets no AI
/// setup.  Everything the controller needs from the asset (key names and
/// types) is validated at that point too.
pub trait PossessedUnit {
    /// The world actor this unit is.
    fn actor(&self) -> ActorId;

    /// Unit type name, used for logging and roster lookup.
    fn unit_type(&self) -> &str;

    /// Main behavior asset, carrying the blackboard schema.
    fn unit_behavior(&self) -> Option<&BehaviorAsset>;

    /// Optional combat subtree.
    fn combat_behavior(&self) -> Option<&BehaviorAsset> {
        None
    }
}

/// Plain-data [`PossessedUnit`].
#[derive(Clone, Debug)]
pub struct UnitDescriptor {
    pub actor:     ActorId,
    pub unit_type: String,
    pub behavior:  Option<BehaviorAsset>,
    pub combat:    Option<BehaviorAsset>,
}

impl UnitDescriptor {
    pub fn new(actor: ActorId, unit_type: impl Into<String>) -> Self {
        Self { actor, unit_type: unit_type.into(), behavior: None, combat: None }
    }

    pub fn with_behavior(mut self, asset: BehaviorAsset) -> Self {
        self.behavior = Some(asset);
        self
    }

    pub fn with_combat(mut self, asset: BehaviorAsset) -> Self {
        self.combat = Some(asset);
        self
    }
}

impl PossessedUnit for UnitDescriptor {
    fn actor(&self) -> ActorId {
        self.actor
    }

    fn unit_type(&self) -> &str {
        &self.unit_type
    }

    fn unit_behavior(&self) -> Option<&BehaviorAsset> {
        self.behavior.as_ref()
    }

    fn combat_behavior(&self) -> Option<&BehaviorAsset> {
        self.combat.as_ref()
    }
}
