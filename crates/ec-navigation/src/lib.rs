//! `ec-navigation`: the movement collaborator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`navigator`] | `Navigator` trait: what the controller calls                  |
//! | [`result`]    | `PathFollowingCode`, `PathFollowingResult`, `MoveCompletion`  |
//! | [`state`]     | `MoveState`: per-unit position and active request             |
//! | [`engine`]    | `NavigationEngine`: straight-line movement + completion queue |
//! | [`error`]     | `NavigationError`, `NavigationResult<T>`                      |
//!
//! # Movement model
//!
//! Pathfinding is out of scope; the engine moves a unit along the straight
//! segment to its destination at a fixed speed.
//!
//! 1. `Navigator::move_to_location` records the destination and returns a
//!    fresh `MoveRequestId`.  A unit has at most one active request: a new
//!    request aborts the previous one.
//! 2. `NavigationEngine::advance(dt)` moves every active unit and returns a
//!    `MoveCompletion` for each request that finished (or was aborted or
//!    rejected) since the last call.
//! 3. The caller routes each completion to the owning controller's
//!    `on_move_completed`.
//!
//! Completions are therefore always delivered on a later step than the
//! request, never re-entrantly from `move_to_location`.

pub mod engine;
pub mod error;
pub mod navigator;
pub mod result;
pub mod state;


pub use engine::NavigationEngine;
pub use error::{NavigationError, NavigationResult};
pub use navigator::Navigator;
pub use result::{MoveCompletion, PathFollowingCode, PathFollowingResult};
pub use state::MoveState;
