//! `ControllerPool`: many controllers sharing one arena and one navigation
//! engine, stepped together.

use ec_behavior::{BehaviorEvaluator, PerceptionCheck, PossessedUnit};
use ec_core::ActorId;
use ec_navigation::{MoveCompletion, NavigationEngine};
use ec_world::{Arena, World};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{ControllerError, ControllerObserver, ControllerResult, EnemyController, StateSnapshot};

/// Owns the world, the navigation engine and every controller, and runs the
/// six-phase step described in the [crate docs](crate).
///
/// Controllers are kept in possession order; every sequential phase visits
/// them in that order so runs are reproducible.
pub struct ControllerPool<E: BehaviorEvaluator> {
    arena:             Arena,
    navigation:        NavigationEngine,
    controllers:       Vec<EnemyController<E>>,
    /// `controllers[i]` drives `units[i]`.
    units:             Vec<ActorId>,
    by_unit:           FxHashMap<ActorId, usize>,
    perception:        Vec<PerceptionCheck>,
    step_seconds:      f32,
    snapshot_interval: u64,
    step:              u64,
}

impl<E: BehaviorEvaluator> ControllerPool<E> {
    pub const DEFAULT_STEP_SECONDS: f32 = 0.1;

    pub fn new(arena: Arena, navigation: NavigationEngine) -> Self {
        Self {
            arena,
            navigation,
            controllers:       Vec::new(),
            units:             Vec::new(),
            by_unit:           FxHashMap::default(),
            perception:        vec![
                PerceptionCheck::LineOfSight,
                PerceptionCheck::AggroRange,
                PerceptionCheck::GuardArea,
            ],
            step_seconds:      Self::DEFAULT_STEP_SECONDS,
            snapshot_interval: 1,
            step:              0,
        }
    }

    /// Checks run for every controller in phase ③, in order.
    pub fn with_perception(mut self, checks: Vec<PerceptionCheck>) -> Self {
        self.perception = checks;
        self
    }

    /// Simulated seconds per step passed to the navigation engine.
    pub fn with_step_seconds(mut self, seconds: f32) -> Self {
        self.step_seconds = seconds;
        self
    }

    /// Emit snapshots every `interval` steps; `0` disables them.
    pub fn with_snapshot_interval(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Place `unit` on the navigation engine at its arena location and bind
    /// `controller` to it.
    ///
    /// The controller is kept even when possession reports an error (e.g. a
    /// unit without a behavior asset); it is then skipped by the evaluate
    /// phase.  The possession result is returned unchanged.
    pub fn possess(
        &mut self,
        unit:           &dyn PossessedUnit,
        mut controller: EnemyController<E>,
    ) -> ControllerResult<()> {
        let actor = unit.actor();
        if self.by_unit.contains_key(&actor) {
            return Err(ControllerError::AlreadyControlled(actor));
        }
        let at = self
            .arena
            .actor_location(actor)
            .ok_or(ControllerError::UnitLocationUnknown(actor))?;
        self.navigation.place(actor, at);

        let result = controller.possess(unit, &self.arena, &mut self.navigation);

        self.by_unit.insert(actor, self.controllers.len());
        self.controllers.push(controller);
        self.units.push(actor);
        result
    }

    /// Unbind and hand back the controller driving `unit`.
    pub fn release(&mut self, unit: ActorId) -> Option<EnemyController<E>> {
        let i = self.by_unit.remove(&unit)?;
        let mut controller = self.controllers.remove(i);
        self.units.remove(i);
        for slot in self.by_unit.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        controller.unpossess();
        Some(controller)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn controller(&self, unit: ActorId) -> Option<&EnemyController<E>> {
        self.by_unit.get(&unit).map(|&i| &self.controllers[i])
    }

    pub fn controller_mut(&mut self, unit: ActorId) -> Option<&mut EnemyController<E>> {
        self.by_unit.get(&unit).map(|&i| &mut self.controllers[i])
    }

    /// Run a commander call against `unit`'s controller with the pool's
    /// world and navigator.
    ///
    /// ```rust,ignore
    /// pool.command(grunt, |c, world, nav| c.guard_point(objective, player, world, nav))?;
    /// ```
    pub fn command<T, F>(&mut self, unit: ActorId, f: F) -> ControllerResult<T>
    where
        F: FnOnce(&mut EnemyController<E>, &Arena, &mut NavigationEngine) -> ControllerResult<T>,
    {
        let &i = self.by_unit.get(&unit).ok_or(ControllerError::UnknownUnit(unit))?;
        f(&mut self.controllers[i], &self.arena, &mut self.navigation)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Scripted world changes (player movement, despawns) go through here.
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn navigation(&self) -> &NavigationEngine {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationEngine {
        &mut self.navigation
    }

    pub fn current_step(&self) -> u64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run `steps` steps, then call `on_run_end`.
    pub fn run<O: ControllerObserver>(&mut self, steps: u64, observer: &mut O) -> ControllerResult<()> {
        for _ in 0..steps {
            self.step(observer)?;
        }
        observer.on_run_end(self.step);
        Ok(())
    }

    /// Run one step.
    ///
    /// # Errors
    ///
    /// Only store failures propagate.  Controllers that are unbound or have
    /// no AI state are skipped; perception failures are journaled.
    pub fn step<O: ControllerObserver>(&mut self, observer: &mut O) -> ControllerResult<()> {
        let now = self.step;
        observer.on_step_start(now);

        // ── ① Movement ────────────────────────────────────────────────────
        let completions = self.navigation.advance(self.step_seconds);
        for (unit, at) in self.navigation.positions() {
            if self.arena.set_actor_location(unit, at).is_err() {
                trace!(%unit, "navigating unit no longer in arena");
            }
        }

        // ── ② Completions ─────────────────────────────────────────────────
        for MoveCompletion { unit, request, result } in completions {
            match self.by_unit.get(&unit) {
                Some(&i) => {
                    self.controllers[i].on_move_completed(request, result)?;
                }
                None => trace!(%unit, %request, "completion for unmanaged unit"),
            }
        }

        // ── ③ Perception ──────────────────────────────────────────────────
        self.run_perception();

        // ── ④ Evaluate ────────────────────────────────────────────────────
        for controller in &mut self.controllers {
            match controller.tick(&self.arena, &mut self.navigation) {
                Ok(_) => {}
                Err(ControllerError::NotPossessed | ControllerError::NoBehavior { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        // ── ⑤ Events ──────────────────────────────────────────────────────
        for (controller, &unit) in self.controllers.iter_mut().zip(&self.units) {
            for event in controller.drain_events() {
                observer.on_event(now, unit, &event);
            }
        }

        // ── ⑥ Snapshot ────────────────────────────────────────────────────
        if self.snapshot_interval > 0 && now % self.snapshot_interval == 0 {
            let rows = self.snapshots(now);
            debug!(step = now, rows = rows.len(), "snapshot");
            observer.on_snapshot(now, &rows);
        }

        self.step += 1;
        Ok(())
    }

    /// One row per controller with an AI state store.
    pub fn snapshots(&self, step: u64) -> Vec<StateSnapshot> {
        self.controllers
            .iter()
            .filter_map(|c| c.snapshot(step, &self.arena))
            .collect()
    }

    fn run_perception(&mut self) {
        let checks = self.perception.as_slice();
        let arena = &self.arena;

        #[cfg(not(feature = "parallel"))]
        {
            for controller in &mut self.controllers {
                controller.run_perception(checks, arena);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.controllers
                .par_iter_mut()
                .for_each(|controller| controller.run_perception(checks, arena));
        }
    }
}
