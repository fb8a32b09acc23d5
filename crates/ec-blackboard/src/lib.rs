//! `ec-blackboard`: the shared state store read by the behavior evaluator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`schema`] | `KeyType`, `KeyId`, `BlackboardSchema`, `SchemaBuilder`     |
//! | [`value`]  | `Value`: one typed blackboard entry                         |
//! | [`store`]  | `Blackboard`: per-controller value array indexed by `KeyId` |
//! | [`keys`]   | Standard key names, `standard_schema()`, `BlackboardKeys`   |
//! | [`error`]  | `BlackboardError`, `BlackboardResult<T>`                    |
//!
//! # Resolution model
//!
//! A schema belongs to a unit type (it ships with the unit's behavior asset).
//! At possession the controller resolves every key it uses into a `KeyId`
//! once ([`BlackboardKeys::resolve`]); an unknown or mistyped key name is a
//! configuration error reported there, never at runtime.  After that every
//! read and write is a bounds-checked array index.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Value` and `KeyType`. |

pub mod error;
pub mod keys;
pub mod schema;
pub mod store;
pub mod value;


pub use error::{BlackboardError, BlackboardResult};
pub use keys::{standard_schema, BlackboardKeys};
pub use schema::{BlackboardSchema, KeyId, KeyType, SchemaBuilder, SchemaEntry};
pub use store::Blackboard;
pub use value::Value;
