//! Standard key names and the resolved key table used by the controller.

use crate::{BlackboardResult, BlackboardSchema, KeyId, KeyType, SchemaBuilder};

pub const IS_EXECUTING_COMMAND: &str = "IsExecutingCommand";
pub const CURRENT_ENEMY: &str = "CurrentEnemy";
pub const KNOWN_ENEMY_LOCATION: &str = "KnownEnemyLocation";
pub const POINT_TO_GUARD: &str = "PointToGuard";
pub const HAVE_LOS: &str = "HaveLoS";
pub const AI_STATE: &str = "AIState";
pub const ENEMY_IN_AGGRO_RANGE: &str = "EnemyInAggroRange";
pub const ENEMY_IN_GUARD_AREA: &str = "EnemyInGuardArea";
pub const ENEMY_IN_LEASH_RANGE: &str = "EnemyInLeashRange";
pub const GUARDED_OBJECTIVE: &str = "GuardedObjective";
pub const POINT_TO_FLEE: &str = "PointToFlee";

/// Every key the controller reads or writes, with its required type.
pub const STANDARD_KEYS: [(&str, KeyType); 11] = [
    (IS_EXECUTING_COMMAND, KeyType::Bool),
    (CURRENT_ENEMY,        KeyType::Object),
    (KNOWN_ENEMY_LOCATION, KeyType::Vector),
    (POINT_TO_GUARD,       KeyType::Vector),
    (HAVE_LOS,             KeyType::Bool),
    (AI_STATE,             KeyType::Enum),
    (ENEMY_IN_AGGRO_RANGE, KeyType::Bool),
    (ENEMY_IN_GUARD_AREA,  KeyType::Bool),
    (ENEMY_IN_LEASH_RANGE, KeyType::Bool),
    (GUARDED_OBJECTIVE,    KeyType::Object),
    (POINT_TO_FLEE,        KeyType::Vector),
];

/// A schema declaring exactly [`STANDARD_KEYS`].
pub fn standard_schema() -> BlackboardSchema {
    STANDARD_KEYS
        .iter()
        .fold(SchemaBuilder::new(), |b, &(name, ty)| b.key(name, ty))
        .build()
        // STANDARD_KEYS has no duplicate names.
        .unwrap_or_default()
}

/// Key handles resolved once against a unit's schema.
///
/// Holding a `BlackboardKeys` proves that every standard key exists in the
/// schema with the right type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlackboardKeys {
    pub is_executing_command: KeyId,
    pub current_enemy:        KeyId,
    pub known_enemy_location: KeyId,
    pub point_to_guard:       KeyId,
    pub have_los:             KeyId,
    pub ai_state:             KeyId,
    pub enemy_in_aggro_range: KeyId,
    pub enemy_in_guard_area:  KeyId,
    pub enemy_in_leash_range: KeyId,
    pub guarded_objective:    KeyId,
    pub point_to_flee:        KeyId,
}

impl BlackboardKeys {
    /// Resolve every standard key.  Fails on the first missing or mistyped
    /// key.
    pub fn resolve(schema: &BlackboardSchema) -> BlackboardResult<Self> {
        Ok(Self {
            is_executing_command: schema.resolve(IS_EXECUTING_COMMAND, KeyType::Bool)?,
            current_enemy:        schema.resolve(CURRENT_ENEMY, KeyType::Object)?,
            known_enemy_location: schema.resolve(KNOWN_ENEMY_LOCATION, KeyType::Vector)?,
            point_to_guard:       schema.resolve(POINT_TO_GUARD, KeyType::Vector)?,
            have_los:             schema.resolve(HAVE_LOS, KeyType::Bool)?,
            ai_state:             schema.resolve(AI_STATE, KeyType::Enum)?,
            enemy_in_aggro_range: schema.resolve(ENEMY_IN_AGGRO_RANGE, KeyType::Bool)?,
            enemy_in_guard_area:  schema.resolve(ENEMY_IN_GUARD_AREA, KeyType::Bool)?,
            enemy_in_leash_range: schema.resolve(ENEMY_IN_LEASH_RANGE, KeyType::Bool)?,
            guarded_objective:    schema.resolve(GUARDED_OBJECTIVE, KeyType::Object)?,
            point_to_flee:        schema.resolve(POINT_TO_FLEE, KeyType::Vector)?,
        })
    }
}
