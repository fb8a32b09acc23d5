//! Read-only view passed to every evaluation.

use ec_blackboard::{Blackboard, BlackboardKeys};
use ec_core::{ActorId, AiState, Vec3};

/// A read-only snapshot of one controller's state for a single
/// [`BehaviorEvaluator::evaluate`][crate::BehaviorEvaluator::evaluate] call.
///
/// The controller never allows mutable access to the blackboard while an
/// `EvalContext` is live.
pub struct EvalContext<'a> {
    /// The possessed unit.
    pub unit: ActorId,

    /// Controller step counter.
    pub step: u64,

    pub board: &'a Blackboard,
    pub keys:  &'a BlackboardKeys,
}

impl<'a> EvalContext<'a> {
    #[inline]
    pub fn new(unit: ActorId, step: u64, board: &'a Blackboard, keys: &'a BlackboardKeys) -> Self {
        Self { unit, step, board, keys }
    }

    /// `None` while the state is unset.  Raw values outside the enum also
    /// read as unset.
    pub fn ai_state(&self) -> Option<AiState> {
        self.board.get_enum(self.keys.ai_state).and_then(AiState::from_u8)
    }

    pub fn current_enemy(&self) -> Option<ActorId> {
        self.board.get_object(self.keys.current_enemy)
    }

    pub fn known_enemy_location(&self) -> Option<Vec3> {
        self.board.get_vector(self.keys.known_enemy_location)
    }

    pub fn point_to_guard(&self) -> Option<Vec3> {
        self.board.get_vector(self.keys.point_to_guard)
    }

    pub fn point_to_flee(&self) -> Option<Vec3> {
        self.board.get_vector(self.keys.point_to_flee)
    }

    pub fn guarded_objective(&self) -> Option<ActorId> {
        self.board.get_object(self.keys.guarded_objective)
    }

    /// Unset flags read as `false`.
    pub fn have_los(&self) -> bool {
        self.flag(self.keys.have_los)
    }

    pub fn enemy_in_aggro_range(&self) -> bool {
        self.flag(self.keys.enemy_in_aggro_range)
    }

    pub fn enemy_in_guard_area(&self) -> bool {
        self.flag(self.keys.enemy_in_guard_area)
    }

    pub fn enemy_in_leash_range(&self) -> bool {
        self.flag(self.keys.enemy_in_leash_range)
    }

    pub fn is_executing_command(&self) -> bool {
        self.flag(self.keys.is_executing_command)
    }

    fn flag(&self, key: ec_blackboard::KeyId) -> bool {
        self.board.get_bool(key).unwrap_or(false)
    }
}
