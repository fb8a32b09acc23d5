//! Straight-line navigation engine.

use ec_core::{ActorId, MoveRequestId, Vec3};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::{
    MoveCompletion, MoveState, NavigationError, NavigationResult, Navigator, PathFollowingCode,
    PathFollowingResult,
};

/// Moves placed units toward their destinations at `speed` world units per
/// second and queues a [`MoveCompletion`] for every request that ends.
pub struct NavigationEngine {
    speed:     f32,
    units:     FxHashMap<ActorId, MoveState>,
    owners:    FxHashMap<MoveRequestId, ActorId>,
    avoidance: FxHashSet<ActorId>,
    pending:   Vec<MoveCompletion>,
    next_id:   MoveRequestId,
    issued:    u64,
}

impl NavigationEngine {
    pub fn new(speed: f32) -> NavigationResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(NavigationError::InvalidSpeed(speed));
        }
        Ok(Self {
            speed,
            units:     FxHashMap::default(),
            owners:    FxHashMap::default(),
            avoidance: FxHashSet::default(),
            pending:   Vec::new(),
            next_id:   MoveRequestId(0),
            issued:    0,
        })
    }

    /// Teleport `unit` to `position` (initial placement).  An active request
    /// is aborted.
    pub fn place(&mut self, unit: ActorId, position: Vec3) {
        if let Some(state) = self.units.get(&unit).copied() {
            if let Some(request) = state.request {
                self.finish(unit, request, PathFollowingCode::Aborted);
            }
        }
        self.units.insert(unit, MoveState::idle(position));
    }

    pub fn position(&self, unit: ActorId) -> Option<Vec3> {
        self.units.get(&unit).map(|s| s.position)
    }

    pub fn state(&self, unit: ActorId) -> Option<&MoveState> {
        self.units.get(&unit)
    }

    pub fn is_moving(&self, unit: ActorId) -> bool {
        self.units.get(&unit).is_some_and(MoveState::is_moving)
    }

    pub fn avoidance_enabled(&self, unit: ActorId) -> bool {
        self.avoidance.contains(&unit)
    }

    /// Total requests accepted since construction.
    pub fn requests_issued(&self) -> u64 {
        self.issued
    }

    /// Every placed unit and its current position, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = (ActorId, Vec3)> + '_ {
        self.units.iter().map(|(&id, s)| (id, s.position))
    }

    /// End an active request early with `code` (e.g. a blocked path).
    pub fn fail_request(
        &mut self,
        request: MoveRequestId,
        code:    PathFollowingCode,
    ) -> NavigationResult<()> {
        let unit = *self
            .owners
            .get(&request)
            .ok_or(NavigationError::UnknownRequest(request))?;
        self.finish(unit, request, code);
        Ok(())
    }

    /// Move every active unit by `dt` seconds and drain the completion queue.
    ///
    /// Completions are returned in request order.
    pub fn advance(&mut self, dt: f32) -> Vec<MoveCompletion> {
        let max_step = self.speed * dt.max(0.0);

        let arrived: Vec<(ActorId, MoveRequestId)> = self
            .units
            .iter_mut()
            .filter_map(|(&unit, state)| {
                let request = state.request?;
                state.step(max_step).then_some((unit, request))
            })
            .collect();

        for (unit, request) in arrived {
            self.finish(unit, request, PathFollowingCode::Success);
        }

        let mut out = std::mem::take(&mut self.pending);
        out.sort_by_key(|c| c.request);
        out
    }

    fn allocate(&mut self) -> MoveRequestId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn finish(&mut self, unit: ActorId, request: MoveRequestId, code: PathFollowingCode) {
        self.owners.remove(&request);
        if let Some(state) = self.units.get_mut(&unit) {
            if state.request == Some(request) {
                state.request = None;
                state.destination = state.position;
            }
        }
        trace!(%unit, %request, %code, "move request finished");
        self.pending.push(MoveCompletion {
            unit,
            request,
            result: PathFollowingResult::new(code),
        });
    }
}

impl Navigator for NavigationEngine {
    fn move_to_location(&mut self, unit: ActorId, destination: Vec3) -> MoveRequestId {
        let request = self.allocate();
        self.issued += 1;

        // Unplaced units and non-finite destinations are rejected through the
        // normal channel; an active request is left running.
        let previous = match self.units.get(&unit) {
            Some(state) if destination.is_finite() => state.request,
            _ => {
                trace!(%unit, %request, "move request rejected");
                self.pending.push(MoveCompletion {
                    unit,
                    request,
                    result: PathFollowingResult::new(PathFollowingCode::Invalid),
                });
                return request;
            }
        };
        if let Some(old) = previous {
            self.finish(unit, old, PathFollowingCode::Aborted);
        }

        if let Some(state) = self.units.get_mut(&unit) {
            state.destination = destination;
            state.request = Some(request);
        }
        self.owners.insert(request, unit);
        request
    }

    fn set_avoidance_enabled(&mut self, unit: ActorId, enabled: bool) {
        if enabled {
            self.avoidance.insert(unit);
        } else {
            self.avoidance.remove(&unit);
        }
    }
}
