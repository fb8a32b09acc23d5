//! The per-controller blackboard.

use std::sync::Arc;

use ec_core::{ActorId, Vec3};

use crate::{BlackboardError, BlackboardResult, BlackboardSchema, KeyId, KeyType, Value};

/// Typed key/value store laid out as one `Option<Value>` per schema slot.
///
/// Every slot starts unset.  Writes are type-checked against the schema so a
/// slot can never hold a value of the wrong type; reads through the typed
/// getters return `None` for an unset slot.
///
/// The schema is shared (`Arc`) between all controllers of the same unit
/// type; the value array is owned by one controller.
#[derive(Clone, Debug)]
pub struct Blackboard {
    schema: Arc<BlackboardSchema>,
    values: Vec<Option<Value>>,
}

impl Blackboard {
    /// A store with every slot of `schema` unset.
    pub fn new(schema: Arc<BlackboardSchema>) -> Self {
        let values = vec![None; schema.len()];
        Self { schema, values }
    }

    pub fn schema(&self) -> &BlackboardSchema {
        &self.schema
    }

    // ── Untyped access ────────────────────────────────────────────────────

    /// Store `value` under `key`.
    pub fn set(&mut self, key: KeyId, value: Value) -> BlackboardResult<()> {
        let expected = self.key_type(key)?;
        let found = value.key_type();
        if expected != found {
            return Err(BlackboardError::ValueTypeMismatch { key, expected, found });
        }
        self.values[key.index()] = Some(value);
        Ok(())
    }

    /// Current value of `key`; `None` if unset or out of range.
    #[inline]
    pub fn get(&self, key: KeyId) -> Option<Value> {
        self.values.get(key.index()).copied().flatten()
    }

    /// Return `key` to the unset state.
    pub fn clear(&mut self, key: KeyId) -> BlackboardResult<()> {
        self.key_type(key)?;
        self.values[key.index()] = None;
        Ok(())
    }

    #[inline]
    pub fn is_set(&self, key: KeyId) -> bool {
        self.get(key).is_some()
    }

    /// `(name, value)` for every slot in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Value>)> + '_ {
        self.schema
            .entries()
            .iter()
            .zip(&self.values)
            .map(|(entry, value)| (entry.name.as_str(), *value))
    }

    // ── Typed helpers ─────────────────────────────────────────────────────

    pub fn set_bool(&mut self, key: KeyId, v: bool) -> BlackboardResult<()> {
        self.set(key, Value::Bool(v))
    }

    pub fn set_object(&mut self, key: KeyId, v: ActorId) -> BlackboardResult<()> {
        self.set(key, Value::Object(v))
    }

    pub fn set_vector(&mut self, key: KeyId, v: Vec3) -> BlackboardResult<()> {
        self.set(key, Value::Vector(v))
    }

    pub fn set_enum(&mut self, key: KeyId, v: u8) -> BlackboardResult<()> {
        self.set(key, Value::Enum(v))
    }

    pub fn get_bool(&self, key: KeyId) -> Option<bool> {
        match self.get(key) {
            Some(Value::Bool(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_object(&self, key: KeyId) -> Option<ActorId> {
        match self.get(key) {
            Some(Value::Object(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_vector(&self, key: KeyId) -> Option<Vec3> {
        match self.get(key) {
            Some(Value::Vector(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_enum(&self, key: KeyId) -> Option<u8> {
        match self.get(key) {
            Some(Value::Enum(v)) => Some(v),
            _ => None,
        }
    }

    fn key_type(&self, key: KeyId) -> BlackboardResult<KeyType> {
        self.schema
            .entry(key)
            .map(|e| e.key_type)
            .ok_or(BlackboardError::InvalidKey(key))
    }
}
