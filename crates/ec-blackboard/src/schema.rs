//! Blackboard schema: the ordered list of named, typed slots a unit type
//! declares.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{BlackboardError, BlackboardResult};

// ── KeyType ───────────────────────────────────────────────────────────────────

/// The value type a blackboard slot holds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    Bool,
    /// Nullable reference to a world actor.
    Object,
    /// 3-D point.
    Vector,
    /// Small enum stored by raw value (e.g. `AiState`).
    Enum,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyType::Bool   => "bool",
            KeyType::Object => "object",
            KeyType::Vector => "vector",
            KeyType::Enum   => "enum",
        })
    }
}

// ── KeyId ─────────────────────────────────────────────────────────────────────

/// Stable handle of one slot within a specific schema.
///
/// A `KeyId` is only meaningful for the schema that produced it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct KeyId(pub u16);

impl KeyId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self.0)
    }
}

// ── BlackboardSchema ──────────────────────────────────────────────────────────

/// One declared slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaEntry {
    pub name:     String,
    pub key_type: KeyType,
}

/// The set of slots a unit type's behavior asset declares.
///
/// Entries keep declaration order; `KeyId(i)` is the i-th entry.  Build with
/// [`SchemaBuilder`].
#[derive(Clone, Debug, Default)]
pub struct BlackboardSchema {
    entries: Vec<SchemaEntry>,
    by_name: FxHashMap<String, KeyId>,
}

impl BlackboardSchema {
    /// Look up a slot by name.
    pub fn key_id(&self, name: &str) -> Option<KeyId> {
        self.by_name.get(name).copied()
    }

    /// Look up a slot by name and check its declared type.
    ///
    /// This is the bind-time check: an absent or mistyped key is a
    /// configuration error.
    pub fn resolve(&self, name: &str, expected: KeyType) -> BlackboardResult<KeyId> {
        let id = self
            .key_id(name)
            .ok_or_else(|| BlackboardError::UnknownKey(name.to_owned()))?;
        let declared = self.entries[id.index()].key_type;
        if declared != expected {
            return Err(BlackboardError::KeyTypeMismatch {
                name: name.to_owned(),
                declared,
                expected,
            });
        }
        Ok(id)
    }

    pub fn entry(&self, key: KeyId) -> Option<&SchemaEntry> {
        self.entries.get(key.index())
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── SchemaBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`BlackboardSchema`].
///
/// ```rust
/// use ec_blackboard::{KeyType, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .key("HaveLoS", KeyType::Bool)
///     .key("CurrentEnemy", KeyType::Object)
///     .build()
///     .unwrap();
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Default)]
pub struct SchemaBuilder {
    entries: Vec<SchemaEntry>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a slot.  Declaring the same name twice with the same type is a
    /// no-op; with a different type, [`build`](Self::build) fails.
    pub fn key(mut self, name: impl Into<String>, key_type: KeyType) -> Self {
        self.entries.push(SchemaEntry { name: name.into(), key_type });
        self
    }

    pub fn build(self) -> BlackboardResult<BlackboardSchema> {
        let mut schema = BlackboardSchema::default();
        for entry in self.entries {
            if let Some(&existing) = schema.by_name.get(&entry.name) {
                let first = schema.entries[existing.index()].key_type;
                if first != entry.key_type {
                    return Err(BlackboardError::ConflictingKey {
                        name:   entry.name,
                        first,
                        second: entry.key_type,
                    });
                }
                continue;
            }
            let id = u16::try_from(schema.entries.len())
                .map(KeyId)
                .map_err(|_| BlackboardError::TooManyKeys(schema.entries.len() + 1))?;
            schema.by_name.insert(entry.name.clone(), id);
            schema.entries.push(entry);
        }
        Ok(schema)
    }
}
