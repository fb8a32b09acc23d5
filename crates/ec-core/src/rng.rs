//! Deterministic per-unit RNG.
//!
//! Each controller owns one `UnitRng` seeded by:
//!
//!   seed = config_seed XOR (actor_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive actor IDs across the seed space.  Two controllers
//! with the same config seed still sample different guard points, and a replay
//! with the same seed and actor ids reproduces every sample.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Aabb, ActorId, Vec3};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-unit deterministic RNG.
pub struct UnitRng(SmallRng);

impl UnitRng {
    /// Seed deterministically from the configured seed and the unit's actor id.
    pub fn new(seed: u64, actor: ActorId) -> Self {
        let mixed = seed ^ (actor.0 as u64).wrapping_mul(MIXING_CONSTANT);
        UnitRng(SmallRng::seed_from_u64(mixed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A point drawn uniformly from the volume of `bounds`.
    ///
    /// Flat axes (`min == max`) yield exactly that coordinate.  The result is
    /// clamped to the box so float rounding can never place it outside.
    pub fn point_in_box(&mut self, bounds: &Aabb) -> Vec3 {
        let mut axis = |lo: f32, hi: f32| {
            if hi > lo { self.0.gen_range(lo..=hi) } else { lo }
        };
        let p = Vec3::new(
            axis(bounds.min.x, bounds.max.x),
            axis(bounds.min.y, bounds.max.y),
            axis(bounds.min.z, bounds.max.z),
        );
        bounds.clamp(p)
    }
}
