//! 3-D geometry used by perception and guard-point sampling.
//!
//! Points are `glam::Vec3` in world units.  `Aabb` is an axis-aligned box:
//! the guard area an objective declares, or an occluder blocking sight.

pub use glam::Vec3;

/// An axis-aligned bounding box.  `min <= max` on every axis.
///
/// Degenerate (flat) boxes are allowed: a guard area drawn on the ground plane
/// typically has `min.z == max.z`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning the two corners, in any order.
    #[inline]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Box of half-size `half_extents` centred on `center`.
    #[inline]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::from_corners(center - half_extents, center + half_extents)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full edge lengths along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Nearest point of the box to `p` (identity for points inside).
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// `true` if the segment `from → to` touches the box.
    ///
    /// Slab test.  A segment that merely grazes a face counts as touching, so
    /// occluders are conservative.
    pub fn intersects_segment(&self, from: Vec3, to: Vec3) -> bool {
        let dir = to - from;
        let mut t_enter = 0.0_f32;
        let mut t_exit  = 1.0_f32;

        for axis in 0..3 {
            let origin = from[axis];
            let d      = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() <= f32::EPSILON {
                // Parallel to this slab: must already lie inside it.
                if origin < lo || origin > hi {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit  = t_exit.min(t1);
            if t_enter > t_exit {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
