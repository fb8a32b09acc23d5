//! `ec-world`: the perception/world collaborator.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`world`] | `World` trait: the queries a controller makes               |
//! | [`actor`] | `ActorKind`, `ActorRecord`                                  |
//! | [`arena`] | `Arena` (actor table + R-tree of occluders), `ArenaBuilder` |
//! | [`error`] | `WorldError`, `WorldResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                            |
//! |---------|---------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `ActorKind`. |

pub mod actor;
pub mod arena;
pub mod error;
pub mod world;

#[cfg(test)]
mod tests;

pub use actor::{ActorKind, ActorRecord};
pub use arena::{Arena, ArenaBuilder};
pub use error::{WorldError, WorldResult};
pub use world::World;
