//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Actor ids are handed out by the
//! world; the controller never owns the actor they refer to.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Handle of an actor in the world: a unit, the player, an objective.
    pub struct ActorId(u32);
}

typed_id! {
    /// Identifier returned by the navigator for one move request.  The later
    /// completion callback carries the same id.
    pub struct MoveRequestId(u32);
}

impl MoveRequestId {
    /// The id following `self`, skipping the `INVALID` sentinel on wrap.
    #[inline]
    pub fn next(self) -> MoveRequestId {
        match self.0.wrapping_add(1) {
            u32::MAX => MoveRequestId(0),
            n => MoveRequestId(n),
        }
    }
}
