use thiserror::Error;

use crate::{KeyId, KeyType};

#[derive(Debug, Error)]
pub enum BlackboardError {
    #[error("blackboard schema has no key named {0:?}")]
    UnknownKey(String),

    #[error("key {name:?} is declared as {declared}, expected {expected}")]
    KeyTypeMismatch {
        name:     String,
        declared: KeyType,
        expected: KeyType,
    },

    #[error("key {name:?} declared twice with different types ({first} and {second})")]
    ConflictingKey {
        name:   String,
        first:  KeyType,
        second: KeyType,
    },

    #[error("schema declares {0} keys; at most 65536 fit a KeyId")]
    TooManyKeys(usize),

    #[error("{0} is out of range for this schema")]
    InvalidKey(KeyId),

    #[error("cannot store a {found} value in {expected} key {key}")]
    ValueTypeMismatch {
        key:      KeyId,
        expected: KeyType,
        found:    KeyType,
    },
}

pub type BlackboardResult<T> = Result<T, BlackboardError>;
