//! Plain data row types written by trace backends.

use ec_controller::{ControllerEvent, StateSnapshot};
use ec_core::{ActorId, AiState};

/// One controller's state at a snapshot step.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub step:                 u64,
    pub unit:                 u32,
    /// Lower-case state label; `"unset"` while suspended.
    pub ai_state:             &'static str,
    /// `u32::MAX` if no enemy is set.
    pub current_enemy:        u32,
    pub have_los:             bool,
    pub enemy_in_aggro_range: bool,
    pub enemy_in_guard_area:  bool,
    pub forced_move:          bool,
    /// NaN when the unit has no location.
    pub x:                    f32,
    pub y:                    f32,
    pub z:                    f32,
}

impl From<&StateSnapshot> for SnapshotRow {
    fn from(s: &StateSnapshot) -> Self {
        let at = s.position.map_or([f32::NAN; 3], |p| p.to_array());
        Self {
            step:                 s.step,
            unit:                 s.unit.0,
            ai_state:             AiState::label(s.ai_state),
            current_enemy:        s.current_enemy.unwrap_or(ActorId::INVALID).0,
            have_los:             s.have_los,
            enemy_in_aggro_range: s.enemy_in_aggro_range,
            enemy_in_guard_area:  s.enemy_in_guard_area,
            forced_move:          s.forced_move,
            x:                    at[0],
            y:                    at[1],
            z:                    at[2],
        }
    }
}

/// One journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub step:   u64,
    pub unit:   u32,
    pub event:  &'static str,
    pub detail: String,
}

impl EventRow {
    pub fn new(step: u64, unit: ActorId, event: &ControllerEvent) -> Self {
        Self {
            step,
            unit:   unit.0,
            event:  event.kind(),
            detail: event.to_string(),
        }
    }
}
