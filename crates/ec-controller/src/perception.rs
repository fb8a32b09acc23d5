//! Perception checks.
//!
//! Each check reads the world and writes one blackboard key (line of sight
//! additionally refreshes `KnownEnemyLocation` on a positive result).  A
//! check whose references do not resolve returns an error and writes
//! nothing; the controller does not re-scan to recover.

use ec_behavior::{BehaviorEvaluator, PerceptionCheck};
use ec_core::{ActorId, Vec3};
use ec_world::World;
use tracing::debug;

use crate::{ControllerError, ControllerEvent, ControllerResult, EnemyController};

impl<E: BehaviorEvaluator> EnemyController<E> {
    /// KnownEnemyLocation ← the cached player's current position.
    ///
    /// Single-player: this tracks the player cached at possession, not
    /// CurrentEnemy.
    pub fn update_known_enemy_location(&mut self, world: &dyn World) -> ControllerResult<()> {
        self.require_state()?;
        let player = self.player.ok_or(ControllerError::NoPlayerCached)?;
        let at = world
            .actor_location(player)
            .ok_or(ControllerError::StaleReference(player))?;

        self.require_state()?.set_known_enemy_location(at)?;
        self.events.push(ControllerEvent::KnownLocationUpdated(at));
        Ok(())
    }

    /// HaveLoS ← visibility of CurrentEnemy from the unit.
    ///
    /// A positive result also runs
    /// [`update_known_enemy_location`](Self::update_known_enemy_location);
    /// a negative one leaves KnownEnemyLocation at its last value.
    pub fn update_los_of_p1(&mut self, world: &dyn World) -> ControllerResult<bool> {
        let (unit_at, target, target_at) = self.locate_enemy(world)?;
        let visible = world.line_of_sight(unit_at, target_at);

        let state = self.require_state()?;
        let previous = state.have_los();
        state.set_have_los(visible)?;

        if previous != Some(visible) {
            if visible {
                debug!(unit = ?self.unit, %target, "have line of sight");
            } else {
                debug!(unit = ?self.unit, %target, "lost line of sight");
            }
        }
        self.events.push(ControllerEvent::LineOfSight { target, visible });

        if visible {
            self.update_known_enemy_location(world)?;
        }
        Ok(visible)
    }

    /// EnemyInAggroRange ← `distance² <= aggro_range²`.
    pub fn update_enemy_in_aggro_range(&mut self, world: &dyn World) -> ControllerResult<bool> {
        let (unit_at, target, target_at) = self.locate_enemy(world)?;
        let in_range = unit_at.distance_squared(target_at) <= self.config.aggro_range_sq();

        self.require_state()?.set_enemy_in_aggro_range(in_range)?;
        self.events.push(ControllerEvent::AggroRange { target, in_range });
        Ok(in_range)
    }

    /// EnemyInGuardArea ← CurrentEnemy within aggro range of PointToGuard.
    ///
    /// `false` when no guard point has been recorded.
    pub fn update_enemy_in_guard_area(&mut self, world: &dyn World) -> ControllerResult<bool> {
        let (_, target, target_at) = self.locate_enemy(world)?;
        let radius_sq = self.config.aggro_range_sq();

        let state = self.require_state()?;
        let in_area = state
            .point_to_guard()
            .is_some_and(|p| p.distance_squared(target_at) <= radius_sq);
        state.set_enemy_in_guard_area(in_area)?;

        self.events.push(ControllerEvent::GuardArea { target, in_area });
        Ok(in_area)
    }

    /// Retreat-point search.  Not implemented; PointToFlee is left as is.
    pub fn update_safe_point(&mut self) {}

    /// Run one check by name.
    pub fn perceive(&mut self, check: PerceptionCheck, world: &dyn World) -> ControllerResult<()> {
        match check {
            PerceptionCheck::KnownEnemyLocation => self.update_known_enemy_location(world),
            PerceptionCheck::LineOfSight        => self.update_los_of_p1(world).map(drop),
            PerceptionCheck::AggroRange         => self.update_enemy_in_aggro_range(world).map(drop),
            PerceptionCheck::GuardArea          => self.update_enemy_in_guard_area(world).map(drop),
            PerceptionCheck::SafePoint => {
                self.update_safe_point();
                Ok(())
            }
        }
    }

    /// Run every check in `checks`, degrading failures to journal entries.
    /// Does nothing without an AI state store.
    pub fn run_perception(&mut self, checks: &[PerceptionCheck], world: &dyn World) {
        if self.state.is_none() {
            return;
        }
        for &check in checks {
            self.perceive_or_skip(check, world);
        }
    }

    pub(crate) fn perceive_or_skip(&mut self, check: PerceptionCheck, world: &dyn World) {
        if let Err(e) = self.perceive(check, world) {
            debug!(unit = ?self.unit, ?check, error = %e, "perception check skipped");
            self.events.push(ControllerEvent::PerceptionSkipped {
                check,
                reason: e.to_string(),
            });
        }
    }

    /// `(unit position, CurrentEnemy, enemy position)`.
    fn locate_enemy(&mut self, world: &dyn World) -> ControllerResult<(Vec3, ActorId, Vec3)> {
        let unit = self.require_unit()?;
        let target = self
            .require_state()?
            .current_enemy()
            .ok_or(ControllerError::NoCurrentEnemy)?;
        let target_at = world
            .actor_location(target)
            .ok_or(ControllerError::StaleReference(target))?;
        let unit_at = world
            .actor_location(unit)
            .ok_or(ControllerError::UnitLocationUnknown(unit))?;
        Ok((unit_at, target, target_at))
    }
}
