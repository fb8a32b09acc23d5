//! The controller's event journal.
//!
//! Every externally visible effect of a controller operation is appended to
//! its journal in the order it happened.  The pool drains the journals once
//! per step and forwards them to the observer.

use std::fmt;

use ec_behavior::{PerceptionCheck, TreeRole};
use ec_core::{ActorId, AiState, MoveRequestId, Vec3};
use ec_navigation::PathFollowingCode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Engage,
    Seek,
    SeekAtPoint,
    Guard,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Engage      => "engage",
            CommandKind::Seek        => "seek",
            CommandKind::SeekAtPoint => "seek_at_point",
            CommandKind::Guard       => "guard",
        }
    }
}

/// Why the AI state changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateCause {
    Command(CommandKind),
    /// A forced guard move completed successfully.
    MoveCompleted,
    /// `change_own_ai_state`, usually from the evaluator.
    SelfDirected,
}

impl fmt::Display for StateCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateCause::Command(kind)  => write!(f, "command:{}", kind.as_str()),
            StateCause::MoveCompleted  => f.write_str("move_completed"),
            StateCause::SelfDirected   => f.write_str("self"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ControllerEvent {
    Possessed { unit_type: String },
    Unpossessed,
    PlayerCached(ActorId),
    ObjectiveCached { objective: ActorId, name: String },
    TreeStarted { role: TreeRole, asset: String },
    CommandIssued { command: CommandKind, target: ActorId },
    StateChanged {
        from:  Option<AiState>,
        to:    Option<AiState>,
        cause: StateCause,
    },
    MoveRequested {
        request:     MoveRequestId,
        destination: Vec3,
        forced:      bool,
    },
    MoveCompleted {
        request: MoveRequestId,
        code:    PathFollowingCode,
        /// `true` if the completion ended a forced move.
        handled: bool,
    },
    LineOfSight { target: ActorId, visible: bool },
    AggroRange { target: ActorId, in_range: bool },
    GuardArea { target: ActorId, in_area: bool },
    KnownLocationUpdated(Vec3),
    PerceptionSkipped { check: PerceptionCheck, reason: String },
}

impl ControllerEvent {
    /// Short machine-readable tag, used as the `event` column in traces.
    pub fn kind(&self) -> &'static str {
        match self {
            ControllerEvent::Possessed { .. }         => "possessed",
            ControllerEvent::Unpossessed              => "unpossessed",
            ControllerEvent::PlayerCached(_)          => "player_cached",
            ControllerEvent::ObjectiveCached { .. }   => "objective_cached",
            ControllerEvent::TreeStarted { .. }       => "tree_started",
            ControllerEvent::CommandIssued { .. }     => "command",
            ControllerEvent::StateChanged { .. }      => "state_changed",
            ControllerEvent::MoveRequested { .. }     => "move_requested",
            ControllerEvent::MoveCompleted { .. }     => "move_completed",
            ControllerEvent::LineOfSight { .. }       => "line_of_sight",
            ControllerEvent::AggroRange { .. }        => "aggro_range",
            ControllerEvent::GuardArea { .. }         => "guard_area",
            ControllerEvent::KnownLocationUpdated(_)  => "known_location",
            ControllerEvent::PerceptionSkipped { .. } => "perception_skipped",
        }
    }
}

/// Human-readable details (the `detail` column in traces).
impl fmt::Display for ControllerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerEvent::Possessed { unit_type } => write!(f, "type={unit_type}"),
            ControllerEvent::Unpossessed => Ok(()),
            ControllerEvent::PlayerCached(player) => write!(f, "player={player}"),
            ControllerEvent::ObjectiveCached { objective, name } => {
                write!(f, "objective={objective} name={name}")
            }
            ControllerEvent::TreeStarted { role, asset } => write!(f, "role={role} asset={asset}"),
            ControllerEvent::CommandIssued { command, target } => {
                write!(f, "command={} target={target}", command.as_str())
            }
            ControllerEvent::StateChanged { from, to, cause } => write!(
                f,
                "{} -> {} ({cause})",
                AiState::label(*from),
                AiState::label(*to)
            ),
            ControllerEvent::MoveRequested { request, destination, forced } => write!(
                f,
                "request={request} to=({:.1}, {:.1}, {:.1}) forced={forced}",
                destination.x, destination.y, destination.z
            ),
            ControllerEvent::MoveCompleted { request, code, handled } => {
                write!(f, "request={request} code={code} handled={handled}")
            }
            ControllerEvent::LineOfSight { target, visible } => {
                write!(f, "target={target} visible={visible}")
            }
            ControllerEvent::AggroRange { target, in_range } => {
                write!(f, "target={target} in_range={in_range}")
            }
            ControllerEvent::GuardArea { target, in_area } => {
                write!(f, "target={target} in_area={in_area}")
            }
            ControllerEvent::KnownLocationUpdated(at) => {
                write!(f, "at=({:.1}, {:.1}, {:.1})", at.x, at.y, at.z)
            }
            ControllerEvent::PerceptionSkipped { check, reason } => {
                write!(f, "check={check:?} reason={reason}")
            }
        }
    }
}
