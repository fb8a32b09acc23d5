//! `ec-core`: foundational types for the enemy-controller workspace.
//!
//! This crate is a dependency of every other `ec-*` crate.  It has no `ec-*`
//! dependencies and keeps external ones small (`glam`, `rand`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `ActorId`, `MoveRequestId`                               |
//! | [`geo`]    | `Vec3` re-export, `Aabb` box with clamp / segment tests  |
//! | [`state`]  | `AiState` (Idle, Flee, Guard, Seek, Engage)              |
//! | [`rng`]    | `UnitRng`: per-unit deterministic RNG                    |
//! | [`config`] | `ControllerConfig`: designer-tunable controller settings |
//! | [`error`]  | `EcError`, `EcResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ControllerConfig;
pub use error::{EcError, EcResult};
pub use geo::{Aabb, Vec3};
pub use ids::{ActorId, MoveRequestId};
pub use rng::UnitRng;
pub use state::AiState;
