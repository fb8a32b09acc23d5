//! Unit tests for ec-world.

use ec_core::{Aabb, ActorId, Vec3};

use crate::{ActorKind, Arena, ArenaBuilder, World, WorldError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Player at the origin, one objective with a guard box, one unit, and a
/// wall at x ∈ [40, 60] spanning y ∈ [-10, 10].
fn small_arena() -> (Arena, ActorId, ActorId, ActorId) {
    let mut b = ArenaBuilder::new();
    let player = b.add_actor(ActorKind::Player, "P1", Vec3::ZERO);
    let objective = b.add_actor(ActorKind::Objective, "ObjectiveMaj_Bridge", Vec3::new(50.0, 50.0, 0.0));
    let unit = b.add_actor(ActorKind::Unit, "Grunt_0", Vec3::new(100.0, 0.0, 0.0));
    b.add_guard_area(objective, Aabb::from_corners(Vec3::ZERO, Vec3::new(100.0, 100.0, 0.0)))
        .unwrap();
    b.add_occluder(Aabb::from_corners(Vec3::new(40.0, -10.0, -10.0), Vec3::new(60.0, 10.0, 10.0)))
        .unwrap();
    (b.build(), player, objective, unit)
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn ids_are_dense() {
        let mut b = ArenaBuilder::new();
        assert_eq!(b.add_actor(ActorKind::Prop, "a", Vec3::ZERO), ActorId(0));
        assert_eq!(b.add_actor(ActorKind::Prop, "b", Vec3::ZERO), ActorId(1));
        assert_eq!(b.actor_count(), 2);
    }

    #[test]
    fn guard_area_on_unknown_actor() {
        let mut b = ArenaBuilder::new();
        let err = b.add_guard_area(ActorId(5), Aabb::from_corners(Vec3::ZERO, Vec3::ONE));
        assert!(matches!(err, Err(WorldError::ActorNotFound(ActorId(5)))));
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let mut b = ArenaBuilder::new();
        let bad = Aabb { min: Vec3::ZERO, max: Vec3::new(f32::INFINITY, 1.0, 1.0) };
        assert!(matches!(b.add_occluder(bad), Err(WorldError::InvalidBounds { .. })));
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn actors_by_kind_in_order() {
        let mut b = ArenaBuilder::new();
        let p0 = b.add_actor(ActorKind::Player, "P1", Vec3::ZERO);
        b.add_actor(ActorKind::Unit, "u", Vec3::ZERO);
        let p1 = b.add_actor(ActorKind::Player, "P2", Vec3::ZERO);
        let arena = b.build();
        assert_eq!(arena.actors(ActorKind::Player), vec![p0, p1]);
        assert!(arena.actors(ActorKind::Objective).is_empty());
    }

    #[test]
    fn name_and_location() {
        let (arena, _, objective, _) = small_arena();
        assert_eq!(arena.actor_name(objective), Some("ObjectiveMaj_Bridge"));
        assert_eq!(arena.actor_location(objective), Some(Vec3::new(50.0, 50.0, 0.0)));
        assert_eq!(arena.actor_location(ActorId(77)), None);
    }

    #[test]
    fn guard_areas_lookup() {
        let (arena, player, objective, _) = small_arena();
        assert_eq!(arena.guard_areas(objective).len(), 1);
        assert!(arena.guard_areas(player).is_empty());
        assert!(arena.guard_areas(ActorId(77)).is_empty());
    }

    #[test]
    fn set_location_moves_actor() {
        let (mut arena, player, _, _) = small_arena();
        arena.set_actor_location(player, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(arena.actor_location(player), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert!(arena.set_actor_location(ActorId(77), Vec3::ZERO).is_err());
    }

    #[test]
    fn despawn_makes_id_stale() {
        let (mut arena, player, objective, unit) = small_arena();
        arena.despawn(objective).unwrap();
        assert_eq!(arena.actor_location(objective), None);
        // Remaining actors still resolve after the index shift.
        assert_eq!(arena.actor_location(player), Some(Vec3::ZERO));
        assert_eq!(arena.actor_location(unit), Some(Vec3::new(100.0, 0.0, 0.0)));
        assert_eq!(arena.actor_count(), 2);
    }
}

// ── Line of sight ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sight_tests {
    use super::*;

    #[test]
    fn wall_blocks_sight() {
        let (arena, _, _, _) = small_arena();
        assert_eq!(arena.occluder_count(), 1);
        assert!(!arena.line_of_sight(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0)));
    }

    #[test]
    fn clear_path_around_wall() {
        let (arena, _, _, _) = small_arena();
        let from = Vec3::new(0.0, 50.0, 0.0);
        let to = Vec3::new(100.0, 50.0, 0.0);
        assert!(arena.line_of_sight(from, to));
    }

    #[test]
    fn segment_ending_before_wall_is_clear() {
        let (arena, _, _, _) = small_arena();
        assert!(arena.line_of_sight(Vec3::ZERO, Vec3::new(39.0, 0.0, 0.0)));
    }

    #[test]
    fn diagonal_bbox_overlap_but_no_hit() {
        // Segment's bounding box overlaps the wall, the segment itself does not.
        let (arena, _, _, _) = small_arena();
        let from = Vec3::new(0.0, 100.0, 0.0);
        let to = Vec3::new(100.0, -20.0, 0.0);
        assert!(arena.line_of_sight(from, to));
    }

    #[test]
    fn empty_arena_always_clear() {
        let arena = ArenaBuilder::new().build();
        assert!(arena.line_of_sight(Vec3::ZERO, Vec3::splat(1000.0)));
    }
}
