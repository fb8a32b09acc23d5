//! The AI behavior-mode enum stored under the `AIState` blackboard key.
//!
//! "Unset" is not a variant: the blackboard models it as an absent value
//! (`Option<AiState>::None`), reachable only by an explicit clear.

use std::fmt;

/// Behavior mode of one enemy unit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AiState {
    Idle   = 0,
    Flee   = 1,
    Guard  = 2,
    Seek   = 3,
    Engage = 4,
}

impl AiState {
    pub const ALL: [AiState; 5] = [
        AiState::Idle,
        AiState::Flee,
        AiState::Guard,
        AiState::Seek,
        AiState::Engage,
    ];

    /// Raw enum value as stored in an enum-typed blackboard slot.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8).  `None` for out-of-range values.
    #[inline]
    pub fn from_u8(raw: u8) -> Option<AiState> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Lower-case label, used in trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            AiState::Idle   => "idle",
            AiState::Flee   => "flee",
            AiState::Guard  => "guard",
            AiState::Seek   => "seek",
            AiState::Engage => "engage",
        }
    }

    /// Label for an optional state; `"unset"` for `None`.
    pub fn label(state: Option<AiState>) -> &'static str {
        state.map_or("unset", AiState::as_str)
    }
}

impl fmt::Display for AiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
