use std::sync::Arc;

use ec_behavior::{BehaviorAsset, UnitDescriptor};
use ec_blackboard::BlackboardSchema;
use ec_core::{ActorId, ControllerConfig};
use rustc_hash::FxHashMap;

/// Tuning for one unit type.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitTypeDef {
    pub unit_type:      String,
    pub aggro_range:    f32,
    /// `None` for types that cannot be AI-driven.
    pub behavior_asset: Option<String>,
    pub combat_asset:   Option<String>,
}

impl UnitTypeDef {
    /// `base` with this type's aggro range applied.
    pub fn controller_config(&self, base: &ControllerConfig) -> ControllerConfig {
        ControllerConfig { aggro_range: self.aggro_range, ..base.clone() }
    }

    /// A possessable unit of this type.  Both assets share `schema`.
    pub fn descriptor(&self, actor: ActorId, schema: &Arc<BlackboardSchema>) -> UnitDescriptor {
        let mut unit = UnitDescriptor::new(actor, self.unit_type.clone());
        if let Some(name) = &self.behavior_asset {
            unit = unit.with_behavior(BehaviorAsset::new(name.clone(), Arc::clone(schema)));
        }
        if let Some(name) = &self.combat_asset {
            unit = unit.with_combat(BehaviorAsset::new(name.clone(), Arc::clone(schema)));
        }
        unit
    }
}

/// All unit types, keyed by name.  Iteration follows file order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    defs:    Vec<UnitTypeDef>,
    by_type: FxHashMap<String, usize>,
}

impl Roster {
    /// Returns `false` (and keeps the first) if the type is already present.
    pub(crate) fn insert(&mut self, def: UnitTypeDef) -> bool {
        if self.by_type.contains_key(&def.unit_type) {
            return false;
        }
        self.by_type.insert(def.unit_type.clone(), self.defs.len());
        self.defs.push(def);
        true
    }

    pub fn get(&self, unit_type: &str) -> Option<&UnitTypeDef> {
        self.by_type.get(unit_type).map(|&i| &self.defs[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitTypeDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
