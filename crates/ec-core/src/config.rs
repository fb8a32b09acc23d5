//! Controller configuration.
//!
//! Typically built from a unit-type roster (see `ec-roster`) and handed to
//! the controller builder.

use crate::{EcError, EcResult, Vec3};

/// Designer-tunable settings for one enemy controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerConfig {
    /// Distance at which the unit "hears" the player and ignores line of
    /// sight.  Compared squared, inclusive.  Default: 750.
    pub aggro_range: f32,

    /// Written to `KnownEnemyLocation` at possession, before any perception
    /// update has run.  Default: the player spawn at (2080, -4020, 200).
    pub default_known_enemy_location: Vec3,

    /// Objectives are cached at possession only if their name contains this
    /// marker.  Default: `"ObjectiveMaj"`.
    pub objective_marker: String,

    /// Seed for guard-point sampling.  Mixed with the unit's actor id.
    pub seed: u64,
}

impl ControllerConfig {
    pub const DEFAULT_AGGRO_RANGE: f32 = 750.0;
    pub const DEFAULT_KNOWN_ENEMY_LOCATION: Vec3 = Vec3::new(2080.0, -4020.0, 200.0);
    pub const DEFAULT_OBJECTIVE_MARKER: &'static str = "ObjectiveMaj";

    /// Reject settings the controller cannot work with.
    pub fn validate(&self) -> EcResult<()> {
        if !self.aggro_range.is_finite() || self.aggro_range < 0.0 {
            return Err(EcError::Config(format!(
                "aggro_range must be a finite, non-negative distance (got {})",
                self.aggro_range
            )));
        }
        if !self.default_known_enemy_location.is_finite() {
            return Err(EcError::Config(
                "default_known_enemy_location must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// `aggro_range²`, the value distances are compared against.
    #[inline]
    pub fn aggro_range_sq(&self) -> f32 {
        self.aggro_range * self.aggro_range
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            aggro_range:                  Self::DEFAULT_AGGRO_RANGE,
            default_known_enemy_location: Self::DEFAULT_KNOWN_ENEMY_LOCATION,
            objective_marker:             Self::DEFAULT_OBJECTIVE_MARKER.to_owned(),
            seed:                         0,
        }
    }
}
