//! One row of controller state, taken at snapshot intervals.

use ec_core::{ActorId, AiState, Vec3};

/// Flattened view of a controller's blackboard at one step.
///
/// Unset boolean keys read as `false`; an unset AI state or enemy stays
/// `None` so output can distinguish "suspended" from a real state.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    pub step:                 u64,
    pub unit:                 ActorId,
    pub ai_state:             Option<AiState>,
    pub current_enemy:        Option<ActorId>,
    pub have_los:             bool,
    pub enemy_in_aggro_range: bool,
    pub enemy_in_guard_area:  bool,
    /// A forced guard move is in flight.
    pub forced_move:          bool,
    /// `None` if the world no longer knows the unit.
    pub position:             Option<Vec3>,
}
