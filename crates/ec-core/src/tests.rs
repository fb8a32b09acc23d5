//! Unit tests for ec-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActorId, MoveRequestId};

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ActorId::INVALID.0, u32::MAX);
        assert_eq!(MoveRequestId::INVALID.0, u32::MAX);
        assert!(!ActorId::default().is_valid());
        assert!(ActorId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(7).to_string(), "ActorId(7)");
    }

    #[test]
    fn request_ids_skip_sentinel_on_wrap() {
        assert_eq!(MoveRequestId(4).next(), MoveRequestId(5));
        assert_eq!(MoveRequestId(u32::MAX - 1).next(), MoveRequestId(0));
    }
}

#[cfg(test)]
mod geo {
    use crate::{Aabb, Vec3};

    #[test]
    fn from_corners_orders_axes() {
        let b = Aabb::from_corners(Vec3::new(10.0, 0.0, 5.0), Vec3::new(0.0, 10.0, -5.0));
        assert_eq!(b.min, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(b.max, Vec3::new(10.0, 10.0, 5.0));
        assert_eq!(b.center(), Vec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Aabb::from_corners(Vec3::ZERO, Vec3::new(100.0, 100.0, 0.0));
        assert!(b.contains(Vec3::ZERO));
        assert!(b.contains(Vec3::new(100.0, 100.0, 0.0)));
        assert!(b.contains(Vec3::new(50.0, 20.0, 0.0)));
        assert!(!b.contains(Vec3::new(50.0, 20.0, 0.1)));
        assert!(!b.contains(Vec3::new(-0.01, 20.0, 0.0)));
    }

    #[test]
    fn clamp_pulls_outside_points_to_surface() {
        let b = Aabb::from_corners(Vec3::ZERO, Vec3::splat(10.0));
        assert_eq!(b.clamp(Vec3::new(-5.0, 5.0, 20.0)), Vec3::new(0.0, 5.0, 10.0));
        assert_eq!(b.clamp(Vec3::splat(3.0)), Vec3::splat(3.0));
    }

    #[test]
    fn segment_through_box_intersects() {
        let wall = Aabb::from_center(Vec3::new(50.0, 0.0, 0.0), Vec3::new(1.0, 20.0, 20.0));
        assert!(wall.intersects_segment(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0)));
    }

    #[test]
    fn segment_stopping_short_misses() {
        let wall = Aabb::from_center(Vec3::new(50.0, 0.0, 0.0), Vec3::new(1.0, 20.0, 20.0));
        assert!(!wall.intersects_segment(Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0)));
    }

    #[test]
    fn segment_passing_beside_misses() {
        let wall = Aabb::from_center(Vec3::new(50.0, 0.0, 0.0), Vec3::new(1.0, 20.0, 20.0));
        assert!(!wall.intersects_segment(Vec3::new(0.0, 30.0, 0.0), Vec3::new(100.0, 30.0, 0.0)));
    }

    #[test]
    fn axis_parallel_segment_inside_slab() {
        let b = Aabb::from_corners(Vec3::ZERO, Vec3::splat(10.0));
        assert!(b.intersects_segment(Vec3::new(5.0, -5.0, 5.0), Vec3::new(5.0, 15.0, 5.0)));
        assert!(!b.intersects_segment(Vec3::new(11.0, -5.0, 5.0), Vec3::new(11.0, 15.0, 5.0)));
    }
}

#[cfg(test)]
mod state {
    use crate::AiState;

    #[test]
    fn raw_value_round_trip() {
        for s in AiState::ALL {
            assert_eq!(AiState::from_u8(s.as_u8()), Some(s));
        }
        assert_eq!(AiState::from_u8(5), None);
    }

    #[test]
    fn unset_label() {
        assert_eq!(AiState::label(None), "unset");
        assert_eq!(AiState::label(Some(AiState::Guard)), "guard");
    }
}

#[cfg(test)]
mod rng {
    use crate::{Aabb, ActorId, UnitRng, Vec3};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = UnitRng::new(12345, ActorId(0));
        let mut r2 = UnitRng::new(12345, ActorId(0));
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_units_differ() {
        let mut r0 = UnitRng::new(1, ActorId(0));
        let mut r1 = UnitRng::new(1, ActorId(1));
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent units should diverge");
    }

    #[test]
    fn point_in_box_stays_inside() {
        let bounds = Aabb::from_corners(Vec3::new(-30.0, 5.0, 0.0), Vec3::new(70.0, 9.0, 12.0));
        let mut rng = UnitRng::new(7, ActorId(3));
        for _ in 0..1000 {
            let p = rng.point_in_box(&bounds);
            assert!(bounds.contains(p), "{p} escaped {bounds}");
        }
    }

    #[test]
    fn point_in_flat_box_keeps_flat_axis() {
        let bounds = Aabb::from_corners(Vec3::ZERO, Vec3::new(100.0, 100.0, 0.0));
        let mut rng = UnitRng::new(0, ActorId(0));
        for _ in 0..200 {
            assert_eq!(rng.point_in_box(&bounds).z, 0.0);
        }
    }

    #[test]
    fn point_in_box_covers_the_area() {
        // Uniform sampling should land in every quadrant of the box.
        let bounds = Aabb::from_corners(Vec3::ZERO, Vec3::new(100.0, 100.0, 0.0));
        let mut rng = UnitRng::new(99, ActorId(0));
        let mut quadrants = [0usize; 4];
        for _ in 0..400 {
            let p = rng.point_in_box(&bounds);
            let q = (p.x >= 50.0) as usize + 2 * (p.y >= 50.0) as usize;
            quadrants[q] += 1;
        }
        assert!(quadrants.iter().all(|&n| n > 50), "{quadrants:?}");
    }
}

#[cfg(test)]
mod config {
    use crate::{ControllerConfig, Vec3};

    #[test]
    fn defaults() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.aggro_range, 750.0);
        assert_eq!(cfg.default_known_enemy_location, Vec3::new(2080.0, -4020.0, 200.0));
        assert_eq!(cfg.objective_marker, "ObjectiveMaj");
        assert_eq!(cfg.aggro_range_sq(), 562_500.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_or_nan_aggro_rejected() {
        let mut cfg = ControllerConfig::default();
        cfg.aggro_range = -1.0;
        assert!(cfg.validate().is_err());
        cfg.aggro_range = f32::NAN;
        assert!(cfg.validate().is_err());
    }
}
