use ec_core::{ActorId, Vec3};

use crate::KeyType;

/// One typed blackboard value.  An unset slot holds no `Value` at all.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Object(ActorId),
    Vector(Vec3),
    Enum(u8),
}

impl Value {
    #[inline]
    pub fn key_type(&self) -> KeyType {
        match self {
            Value::Bool(_)   => KeyType::Bool,
            Value::Object(_) => KeyType::Object,
            Value::Vector(_) => KeyType::Vector,
            Value::Enum(_)   => KeyType::Enum,
        }
    }
}
