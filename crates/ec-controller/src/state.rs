//! The controller-owned unit state.
//!
//! `UnitState` wraps the blackboard and the forced-move tracker behind named
//! operations.  Reads are public; every write is crate-private, so the only
//! way to change AI state from outside is through the controller's commands,
//! its completion handler, or `change_own_ai_state`.

use std::sync::Arc;

use ec_behavior::{EvalContext, FlagKey};
use ec_blackboard::{Blackboard, BlackboardKeys, BlackboardResult, BlackboardSchema};
use ec_core::{ActorId, AiState, MoveRequestId, Vec3};

pub struct UnitState {
    board:       Blackboard,
    keys:        BlackboardKeys,
    /// Set while a forced guard move is pending.  Holds the request it was
    /// armed with, for logging; completions are not matched against it.
    forced_move: Option<MoveRequestId>,
}

impl UnitState {
    /// Create an all-unset store over `schema` and resolve every key.
    ///
    /// Fails if the schema lacks a key the controller uses or declares it
    /// with the wrong type.
    pub fn new(schema: Arc<BlackboardSchema>) -> BlackboardResult<Self> {
        let keys = BlackboardKeys::resolve(&schema)?;
        Ok(Self { board: Blackboard::new(schema), keys, forced_move: None })
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn board(&self) -> &Blackboard {
        &self.board
    }

    pub fn keys(&self) -> &BlackboardKeys {
        &self.keys
    }

    /// Read-only view for the evaluator.
    pub fn context(&self, unit: ActorId, step: u64) -> EvalContext<'_> {
        EvalContext::new(unit, step, &self.board, &self.keys)
    }

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

    pub fn guarded_objective(&self) -> Option<ActorId> {
        self.board.get_object(self.keys.guarded_objective)
    }

    pub fn have_los(&self) -> Option<bool> {
        self.board.get_bool(self.keys.have_los)
    }

    pub fn enemy_in_aggro_range(&self) -> Option<bool> {
        self.board.get_bool(self.keys.enemy_in_aggro_range)
    }

    pub fn enemy_in_guard_area(&self) -> Option<bool> {
        self.board.get_bool(self.keys.enemy_in_guard_area)
    }

    pub fn flag(&self, flag: FlagKey) -> Option<bool> {
        self.board.get_bool(self.flag_key(flag))
    }

    pub fn forced_move(&self) -> Option<MoveRequestId> {
        self.forced_move
    }

    #[inline]
    pub fn is_forced_move_armed(&self) -> bool {
        self.forced_move.is_some()
    }

    // ── Command transitions ───────────────────────────────────────────────

    /// Engage / seek: focus `target` and enter `state`.  A pending forced
    /// move stays armed.
    pub(crate) fn direct(&mut self, target: ActorId, state: AiState) -> BlackboardResult<()> {
        self.board.set_object(self.keys.current_enemy, target)?;
        self.board.set_enum(self.keys.ai_state, state.as_u8())
    }

    /// First half of a guard command: AI state goes unset so the evaluator
    /// stands down until the forced move finishes.
    pub(crate) fn suspend_for_forced_move(&mut self) -> BlackboardResult<()> {
        self.forced_move = None;
        self.board.clear(self.keys.ai_state)
    }

    pub(crate) fn arm_forced_move(&mut self, request: MoveRequestId) {
        self.forced_move = Some(request);
    }

    /// Second half of a guard command.
    pub(crate) fn record_guard(
        &mut self,
        point:     Vec3,
        target:    ActorId,
        objective: ActorId,
    ) -> BlackboardResult<()> {
        self.board.set_vector(self.keys.point_to_guard, point)?;
        self.board.set_object(self.keys.current_enemy, target)?;
        self.board.set_object(self.keys.guarded_objective, objective)
    }

    /// Finish an armed forced move: AI state becomes Guard and the flag is
    /// cleared.  Returns whether a move was armed.
    pub(crate) fn complete_forced_move(&mut self) -> BlackboardResult<bool> {
        if self.forced_move.is_none() {
            return Ok(false);
        }
        self.board.set_enum(self.keys.ai_state, AiState::Guard.as_u8())?;
        self.forced_move = None;
        Ok(true)
    }

    pub(crate) fn change_own_ai_state(&mut self, state: AiState) -> BlackboardResult<()> {
        self.board.set_enum(self.keys.ai_state, state.as_u8())
    }

    // ── Perception writes ─────────────────────────────────────────────────

    pub(crate) fn set_known_enemy_location(&mut self, at: Vec3) -> BlackboardResult<()> {
        self.board.set_vector(self.keys.known_enemy_location, at)
    }

    pub(crate) fn set_have_los(&mut self, visible: bool) -> BlackboardResult<()> {
        self.board.set_bool(self.keys.have_los, visible)
    }

    pub(crate) fn set_enemy_in_aggro_range(&mut self, in_range: bool) -> BlackboardResult<()> {
        self.board.set_bool(self.keys.enemy_in_aggro_range, in_range)
    }

    pub(crate) fn set_enemy_in_guard_area(&mut self, in_area: bool) -> BlackboardResult<()> {
        self.board.set_bool(self.keys.enemy_in_guard_area, in_area)
    }

    pub(crate) fn set_flag(&mut self, flag: FlagKey, value: bool) -> BlackboardResult<()> {
        self.board.set_bool(self.flag_key(flag), value)
    }

    fn flag_key(&self, flag: FlagKey) -> ec_blackboard::KeyId {
        match flag {
            FlagKey::IsExecutingCommand => self.keys.is_executing_command,
            FlagKey::EnemyInLeashRange  => self.keys.enemy_in_leash_range,
        }
    }
}
