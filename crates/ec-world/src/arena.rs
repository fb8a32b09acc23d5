//! In-memory world: an actor table plus an R-tree of sight-blocking boxes.
//!
//! # Line of sight
//!
//! Occluders are axis-aligned boxes bulk-loaded into an `rstar` R-tree.  A
//! sight query descends only into nodes whose envelope overlaps the
//! segment's bounding box, then runs the exact slab test on each leaf.

use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};
use rustc_hash::FxHashMap;

use ec_core::{Aabb, ActorId, Vec3};

use crate::{ActorKind, ActorRecord, World, WorldError, WorldResult};

// ── R-tree occluder entry ─────────────────────────────────────────────────────

#[derive(Clone)]
struct Occluder {
    bounds: Aabb,
}

impl RTreeObject for Occluder {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bounds.min.to_array(), self.bounds.max.to_array())
    }
}

/// Selects occluders crossed by the segment `from → to`.
struct SightLine {
    from:   Vec3,
    to:     Vec3,
    bounds: AABB<[f32; 3]>,
}

impl SightLine {
    fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to, bounds: AABB::from_corners(from.to_array(), to.to_array()) }
    }
}

impl SelectionFunction<Occluder> for SightLine {
    fn should_unpack_parent(&self, envelope: &AABB<[f32; 3]>) -> bool {
        envelope.intersects(&self.bounds)
    }

    fn should_unpack_leaf(&self, leaf: &Occluder) -> bool {
        leaf.bounds.intersects_segment(self.from, self.to)
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The concrete [`World`] used by the controller pool and tests.
///
/// Actor ids are dense and assigned by [`ArenaBuilder::add_actor`].
pub struct Arena {
    actors:    Vec<ActorRecord>,
    index:     FxHashMap<ActorId, usize>,
    occluders: RTree<Occluder>,
}

impl Arena {
    pub fn actor(&self, id: ActorId) -> Option<&ActorRecord> {
        self.index.get(&id).map(|&i| &self.actors[i])
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn occluder_count(&self) -> usize {
        self.occluders.size()
    }

    /// Move an actor.  Used to mirror navigation and scripted player motion.
    pub fn set_actor_location(&mut self, id: ActorId, location: Vec3) -> WorldResult<()> {
        let &i = self.index.get(&id).ok_or(WorldError::ActorNotFound(id))?;
        self.actors[i].location = location;
        Ok(())
    }

    /// Remove an actor; later queries treat its id as stale.
    pub fn despawn(&mut self, id: ActorId) -> WorldResult<ActorRecord> {
        let i = self.index.remove(&id).ok_or(WorldError::ActorNotFound(id))?;
        let record = self.actors.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Ok(record)
    }
}

impl World for Arena {
    fn actors(&self, kind: ActorKind) -> Vec<ActorId> {
        self.actors.iter().filter(|a| a.kind == kind).map(|a| a.id).collect()
    }

    fn actor_name(&self, actor: ActorId) -> Option<&str> {
        self.actor(actor).map(|a| a.name.as_str())
    }

    fn actor_location(&self, actor: ActorId) -> Option<Vec3> {
        self.actor(actor).map(|a| a.location)
    }

    fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool {
        self.occluders
            .locate_with_selection_function(SightLine::new(from, to))
            .next()
            .is_none()
    }

    fn guard_areas(&self, objective: ActorId) -> &[Aabb] {
        self.actor(objective).map(|a| a.guard_areas.as_slice()).unwrap_or(&[])
    }
}

// ── ArenaBuilder ──────────────────────────────────────────────────────────────

/// Incremental builder for [`Arena`].
///
/// ```rust
/// use ec_core::{Aabb, Vec3};
/// use ec_world::{ActorKind, ArenaBuilder, World};
///
/// let mut b = ArenaBuilder::new();
/// let player = b.add_actor(ActorKind::Player, "P1", Vec3::ZERO);
/// let obj = b.add_actor(ActorKind::Objective, "ObjectiveMaj_A", Vec3::X);
/// b.add_guard_area(obj, Aabb::from_corners(Vec3::ZERO, Vec3::ONE)).unwrap();
/// let arena = b.build();
/// assert_eq!(arena.actors(ActorKind::Player), vec![player]);
/// ```
#[derive(Default)]
pub struct ArenaBuilder {
    actors:    Vec<ActorRecord>,
    occluders: Vec<Occluder>,
}

impl ArenaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor and return its id.
    pub fn add_actor(&mut self, kind: ActorKind, name: impl Into<String>, location: Vec3) -> ActorId {
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(ActorRecord {
            id,
            kind,
            name: name.into(),
            location,
            guard_areas: Vec::new(),
        });
        id
    }

    /// Attach a Guard-tagged box to `actor`.
    pub fn add_guard_area(&mut self, actor: ActorId, bounds: Aabb) -> WorldResult<()> {
        check_finite(&bounds)?;
        let record = self
            .actors
            .get_mut(actor.0 as usize)
            .ok_or(WorldError::ActorNotFound(actor))?;
        record.guard_areas.push(bounds);
        Ok(())
    }

    /// Add a box that blocks line of sight.
    pub fn add_occluder(&mut self, bounds: Aabb) -> WorldResult<()> {
        check_finite(&bounds)?;
        self.occluders.push(Occluder { bounds });
        Ok(())
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Consume the builder.  The occluder R-tree is bulk-loaded.
    pub fn build(self) -> Arena {
        let index = self
            .actors
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();
        Arena {
            actors: self.actors,
            index,
            occluders: RTree::bulk_load(self.occluders),
        }
    }
}

fn check_finite(bounds: &Aabb) -> WorldResult<()> {
    if bounds.min.is_finite() && bounds.max.is_finite() {
        Ok(())
    } else {
        Err(WorldError::InvalidBounds {
            min: bounds.min.to_array(),
            max: bounds.max.to_array(),
        })
    }
}
