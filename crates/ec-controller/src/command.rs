//! Commander entry points.
//!
//! Every command is an idempotent write: issuing it twice leaves the same
//! store state as issuing it once (guard re-samples its point).  Engage and
//! seek leave a pending forced guard move armed; its successful completion
//! still switches the unit to Guard.

use ec_behavior::BehaviorEvaluator;
use ec_core::{ActorId, AiState, MoveRequestId, Vec3};
use ec_navigation::Navigator;
use ec_world::World;
use tracing::debug;

use crate::{
    CommandKind, ControllerError, ControllerEvent, ControllerResult, EnemyController, StateCause,
};

impl<E: BehaviorEvaluator> EnemyController<E> {
    /// CurrentEnemy ← `target`, AIState ← Engage.
    pub fn engage_enemy(&mut self, target: ActorId) -> ControllerResult<()> {
        self.direct(CommandKind::Engage, target, AiState::Engage)
    }

    /// CurrentEnemy ← `target`, AIState ← Seek.
    pub fn seek_enemy(&mut self, target: ActorId) -> ControllerResult<()> {
        self.direct(CommandKind::Seek, target, AiState::Seek)
    }

    /// As [`seek_enemy`](Self::seek_enemy), then one fire-and-forget move
    /// toward `point`.
    pub fn seek_enemy_at_point(
        &mut self,
        target: ActorId,
        point:  Vec3,
        nav:    &mut dyn Navigator,
    ) -> ControllerResult<MoveRequestId> {
        self.direct(CommandKind::SeekAtPoint, target, AiState::Seek)?;
        let unit = self.require_unit()?;

        let request = nav.move_to_location(unit, point);
        self.events.push(ControllerEvent::MoveRequested {
            request,
            destination: point,
            forced: false,
        });
        Ok(request)
    }

    /// Send the unit to a random point inside `objective`'s guard area.
    ///
    /// AI state is cleared before the move is issued and stays unset until
    /// the forced move completes successfully (see
    /// [`on_move_completed`](Self::on_move_completed)).  PointToGuard,
    /// CurrentEnemy and GuardedObjective are recorded.
    ///
    /// # Errors
    ///
    /// [`ControllerError::MissingGuardArea`] if the objective has no
    /// Guard-tagged box.  Nothing is written and no move is issued.
    pub fn guard_point(
        &mut self,
        objective: ActorId,
        target:    ActorId,
        world:     &dyn World,
        nav:       &mut dyn Navigator,
    ) -> ControllerResult<MoveRequestId> {
        let unit = self.require_unit()?;
        self.require_state()?;

        let area = *world
            .guard_areas(objective)
            .first()
            .ok_or(ControllerError::MissingGuardArea(objective))?;
        let point = self.rng.point_in_box(&area);

        self.events.push(ControllerEvent::CommandIssued { command: CommandKind::Guard, target });
        self.transition(StateCause::Command(CommandKind::Guard), |s| s.suspend_for_forced_move())?;

        let request = nav.move_to_location(unit, point);
        let state = self.require_state()?;
        state.arm_forced_move(request);
        state.record_guard(point, target, objective)?;

        debug!(%unit, %objective, %request, x = point.x, y = point.y, z = point.z, "forced guard move issued");
        self.events.push(ControllerEvent::MoveRequested {
            request,
            destination: point,
            forced: true,
        });
        Ok(request)
    }

    fn direct(&mut self, command: CommandKind, target: ActorId, to: AiState) -> ControllerResult<()> {
        self.require_state()?;
        self.events.push(ControllerEvent::CommandIssued { command, target });
        self.transition(StateCause::Command(command), |s| s.direct(target, to))
    }
}
