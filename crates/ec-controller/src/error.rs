use ec_behavior::BehaviorError;
use ec_blackboard::BlackboardError;
use ec_core::{ActorId, EcError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("controller configuration error: {0}")]
    Config(#[from] EcError),

    #[error("blackboard error: {0}")]
    Blackboard(#[from] BlackboardError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("unit {unit} ({unit_type}) exposes no behavior asset")]
    NoBehavior { unit: ActorId, unit_type: String },

    #[error("controller has not possessed a unit")]
    NotPossessed,

    #[error("objective {0} has no Guard-tagged area")]
    MissingGuardArea(ActorId),

    #[error("no player reference was cached at possession")]
    NoPlayerCached,

    #[error("no current enemy is set")]
    NoCurrentEnemy,

    #[error("actor {0} no longer resolves in the world")]
    StaleReference(ActorId),

    #[error("location of possessed unit {0} is unknown")]
    UnitLocationUnknown(ActorId),

    #[error("unit {0} is not managed by this pool")]
    UnknownUnit(ActorId),

    #[error("unit {0} already has a controller")]
    AlreadyControlled(ActorId),
}

pub type ControllerResult<T> = Result<T, ControllerError>;
