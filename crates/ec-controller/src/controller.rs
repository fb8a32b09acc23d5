//! `EnemyController`: possession, the move-completion handler, and the
//! evaluate/apply tick.

use ec_behavior::{BehaviorEvaluator, Intent, PossessedUnit, TreeRole};
use ec_core::{ActorId, AiState, ControllerConfig, MoveRequestId, UnitRng};
use ec_navigation::{Navigator, PathFollowingResult};
use ec_world::{ActorKind, World};
use tracing::{debug, info, warn};

use crate::{
    ControllerError, ControllerEvent, ControllerResult, StateCause, StateSnapshot, UnitState,
};

/// Drives one possessed unit.
///
/// Holds the unit's blackboard (inside [`UnitState`]), the references cached
/// at possession, and the behavior evaluator.  All entry points take the
/// world and navigator as arguments; the controller never owns either.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct EnemyController<E: BehaviorEvaluator> {
    pub(crate) config:     ControllerConfig,
    pub(crate) evaluator:  E,
    pub(crate) rng:        UnitRng,
    pub(crate) unit:       Option<ActorId>,
    pub(crate) unit_type:  String,
    pub(crate) state:      Option<UnitState>,
    pub(crate) player:     Option<ActorId>,
    pub(crate) objectives: Vec<ActorId>,
    pub(crate) events:     Vec<ControllerEvent>,
    pub(crate) step:       u64,
}

impl<E: BehaviorEvaluator> EnemyController<E> {
    pub(crate) fn new(config: ControllerConfig, evaluator: E) -> Self {
        let rng = UnitRng::new(config.seed, ActorId::INVALID);
        Self {
            config,
            evaluator,
            rng,
            unit:       None,
            unit_type:  String::new(),
            state:      None,
            player:     None,
            objectives: Vec::new(),
            events:     Vec::new(),
            step:       0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn unit(&self) -> Option<ActorId> {
        self.unit
    }

    pub fn unit_type(&self) -> &str {
        &self.unit_type
    }

    /// `None` until a unit with a behavior asset is possessed.
    pub fn state(&self) -> Option<&UnitState> {
        self.state.as_ref()
    }

    pub fn ai_state(&self) -> Option<AiState> {
        self.state.as_ref().and_then(UnitState::ai_state)
    }

    pub fn forced_move(&self) -> Option<MoveRequestId> {
        self.state.as_ref().and_then(UnitState::forced_move)
    }

    pub fn player(&self) -> Option<ActorId> {
        self.player
    }

    pub fn objectives(&self) -> &[ActorId] {
        &self.objectives
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn events(&self) -> &[ControllerEvent] {
        &self.events
    }

    /// Take every journal entry recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Bind to `unit`.
    ///
    /// Local avoidance is enabled and the world is scanned for the player
    /// and the objectives in every case.  AI setup (store creation, key
    /// resolution, the fallback `KnownEnemyLocation`, starting the trees)
    /// only happens when the unit exposes a behavior asset; otherwise this
    /// returns [`ControllerError::NoBehavior`] and the controller stays
    /// bound without a store.
    ///
    /// Possessing while already bound releases the previous unit first.
    pub fn possess(
        &mut self,
        unit:  &dyn PossessedUnit,
        world: &dyn World,
        nav:   &mut dyn Navigator,
    ) -> ControllerResult<()> {
        if self.unit.is_some() {
            self.unpossess();
        }

        let actor = unit.actor();
        self.unit = Some(actor);
        self.unit_type = unit.unit_type().to_owned();
        self.rng = UnitRng::new(self.config.seed, actor);
        self.step = 0;

        nav.set_avoidance_enabled(actor, true);

        let setup = self.initialize_ai(unit);
        match &setup {
            Ok(()) => {
                info!(unit = %actor, unit_type = %self.unit_type, "possessed unit");
                self.events.push(ControllerEvent::Possessed { unit_type: self.unit_type.clone() });
            }
            Err(e) => warn!(unit = %actor, unit_type = %self.unit_type, error = %e, "AI setup skipped"),
        }

        self.scan_world(world);
        setup
    }

    fn initialize_ai(&mut self, unit: &dyn PossessedUnit) -> ControllerResult<()> {
        let actor = unit.actor();
        let asset = unit.unit_behavior().ok_or_else(|| ControllerError::NoBehavior {
            unit:      actor,
            unit_type: unit.unit_type().to_owned(),
        })?;

        let mut state = UnitState::new(asset.schema.clone())?;
        state.set_known_enemy_location(self.config.default_known_enemy_location)?;
        self.state = Some(state);

        self.evaluator.start_tree(TreeRole::Root, asset)?;
        self.events.push(ControllerEvent::TreeStarted {
            role:  TreeRole::Root,
            asset: asset.name.clone(),
        });

        if let Some(combat) = unit.combat_behavior() {
            self.evaluator.start_tree(TreeRole::Combat, combat)?;
            self.events.push(ControllerEvent::TreeStarted {
                role:  TreeRole::Combat,
                asset: combat.name.clone(),
            });
        }
        Ok(())
    }

    /// Cache the player (the last one the world reports) and every objective
    /// whose name carries the configured marker.
    fn scan_world(&mut self, world: &dyn World) {
        self.player = world.actors(ActorKind::Player).last().copied();
        if let Some(player) = self.player {
            self.events.push(ControllerEvent::PlayerCached(player));
        }

        self.objectives.clear();
        for objective in world.actors(ActorKind::Objective) {
            let Some(name) = world.actor_name(objective) else { continue };
            if name.contains(self.config.objective_marker.as_str()) {
                info!(%objective, objective_name = name, "cached objective");
                self.events.push(ControllerEvent::ObjectiveCached {
                    objective,
                    name: name.to_owned(),
                });
                self.objectives.push(objective);
            }
        }
    }

    /// Re-run the possession-time world scan.  Never called automatically.
    pub fn rescan_world(&mut self, world: &dyn World) -> ControllerResult<()> {
        if self.unit.is_none() {
            return Err(ControllerError::NotPossessed);
        }
        self.scan_world(world);
        Ok(())
    }

    /// Stop the trees, drop the store and every cached reference.
    pub fn unpossess(&mut self) {
        if self.unit.take().is_none() {
            return;
        }
        self.evaluator.stop();
        self.state = None;
        self.player = None;
        self.objectives.clear();
        self.unit_type.clear();
        self.events.push(ControllerEvent::Unpossessed);
    }

    // ── Movement completion ───────────────────────────────────────────────

    /// Handle a finished move request.
    ///
    /// Only a successful completion while a forced move is armed changes
    /// anything: AI state becomes Guard and the flag is cleared.  The request
    /// id is not checked.  Every other completion is ignored.  Returns
    /// whether it was handled.
    pub fn on_move_completed(
        &mut self,
        request: MoveRequestId,
        result:  PathFollowingResult,
    ) -> ControllerResult<bool> {
        let Some(state) = self.state.as_mut() else {
            debug!(%request, "move completed with no AI state; ignored");
            return Ok(false);
        };

        let from = state.ai_state();
        let handled = result.is_success() && state.complete_forced_move()?;

        if handled {
            info!(unit = ?self.unit, %request, "Activating guard tree");
            self.events.push(ControllerEvent::StateChanged {
                from,
                to: Some(AiState::Guard),
                cause: StateCause::MoveCompleted,
            });
        } else {
            debug!(
                unit = ?self.unit,
                %request,
                code = %result.code,
                armed = ?state.forced_move(),
                "move completion ignored"
            );
        }
        self.events.push(ControllerEvent::MoveCompleted {
            request,
            code: result.code,
            handled,
        });
        Ok(handled)
    }

    // ── Self-directed transition ──────────────────────────────────────────

    /// The unit's own state override, used by the evaluator's action nodes.
    pub fn change_own_ai_state(&mut self, to: AiState) -> ControllerResult<()> {
        self.transition(StateCause::SelfDirected, |s| s.change_own_ai_state(to))
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Evaluate the behavior tree once and apply the returned intents in
    /// order.  Returns the number of intents applied.
    pub fn tick(&mut self, world: &dyn World, nav: &mut dyn Navigator) -> ControllerResult<usize> {
        let unit = self.require_unit()?;
        let state = self.state.as_ref().ok_or_else(|| ControllerError::NoBehavior {
            unit,
            unit_type: self.unit_type.clone(),
        })?;

        self.step += 1;
        let ctx = state.context(unit, self.step);
        let intents = self.evaluator.evaluate(&ctx, &mut self.rng);

        let applied = intents.len();
        for intent in intents {
            self.apply_intent(unit, intent, world, nav)?;
        }
        Ok(applied)
    }

    fn apply_intent(
        &mut self,
        unit:   ActorId,
        intent: Intent,
        world:  &dyn World,
        nav:    &mut dyn Navigator,
    ) -> ControllerResult<()> {
        match intent {
            Intent::ChangeOwnAiState(to) => self.change_own_ai_state(to)?,

            // Evaluator moves are plain moves; their completion never
            // changes AI state.
            Intent::MoveTo(destination) => {
                let request = nav.move_to_location(unit, destination);
                self.events.push(ControllerEvent::MoveRequested {
                    request,
                    destination,
                    forced: false,
                });
            }

            Intent::Perceive(check) => self.perceive_or_skip(check, world),

            Intent::SetFlag(flag, value) => self.require_state()?.set_flag(flag, value)?,
        }
        Ok(())
    }

    // ── Snapshot ──────────────────────────────────────────────────────────

    /// Current state as one output row; `None` without an AI state store.
    pub fn snapshot(&self, step: u64, world: &dyn World) -> Option<StateSnapshot> {
        let unit = self.unit?;
        let state = self.state.as_ref()?;
        Some(StateSnapshot {
            step,
            unit,
            ai_state:             state.ai_state(),
            current_enemy:        state.current_enemy(),
            have_los:             state.have_los().unwrap_or(false),
            enemy_in_aggro_range: state.enemy_in_aggro_range().unwrap_or(false),
            enemy_in_guard_area:  state.enemy_in_guard_area().unwrap_or(false),
            forced_move:          state.is_forced_move_armed(),
            position:             world.actor_location(unit),
        })
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    pub(crate) fn require_unit(&self) -> ControllerResult<ActorId> {
        self.unit.ok_or(ControllerError::NotPossessed)
    }

    pub(crate) fn require_state(&mut self) -> ControllerResult<&mut UnitState> {
        let unit = self.require_unit()?;
        match self.state.as_mut() {
            Some(state) => Ok(state),
            None => Err(ControllerError::NoBehavior { unit, unit_type: self.unit_type.clone() }),
        }
    }

    /// Run `write` against the unit state and journal the AI-state change,
    /// if any.
    pub(crate) fn transition<F>(&mut self, cause: StateCause, write: F) -> ControllerResult<()>
    where
        F: FnOnce(&mut UnitState) -> ec_blackboard::BlackboardResult<()>,
    {
        let state = self.require_state()?;
        let from = state.ai_state();
        write(state)?;
        let to = state.ai_state();
        if from != to {
            debug!(
                unit = ?self.unit,
                from = AiState::label(from),
                to = AiState::label(to),
                %cause,
                "AI state changed"
            );
            self.events.push(ControllerEvent::StateChanged { from, to, cause });
        }
        Ok(())
    }
}
