//! Intents: what the behavior tree asks its controller to do.

use ec_core::{AiState, Vec3};

/// A perception check the tree wants refreshed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PerceptionCheck {
    KnownEnemyLocation,
    LineOfSight,
    AggroRange,
    GuardArea,
    SafePoint,
}

/// Boolean blackboard flags the tree may set directly.
///
/// Everything else is written by the controller's own operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlagKey {
    IsExecutingCommand,
    EnemyInLeashRange,
}

/// An action produced by
/// [`BehaviorEvaluator::evaluate`][crate::BehaviorEvaluator::evaluate].
///
/// Intents are applied in order by the controller after evaluation returns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent {
    /// Self-directed AI state override.
    ChangeOwnAiState(AiState),

    /// Fire-and-forget move request.  Not a forced move: its completion
    /// never changes AI state.
    MoveTo(Vec3),

    /// Run one perception check now.
    Perceive(PerceptionCheck),

    SetFlag(FlagKey, bool),
}
