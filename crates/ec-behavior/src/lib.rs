//! `ec-behavior`: the contract between the controller and the behavior tree.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`unit`]      | `PossessedUnit` capability trait, `UnitDescriptor`              |
//! | [`asset`]     | `BehaviorAsset`, `TreeRole`                                     |
//! | [`intent`]    | `Intent`, `PerceptionCheck`, `FlagKey`                          |
//! | [`context`]   | `EvalContext<'a>`: read-only blackboard view for one evaluation |
//! | [`evaluator`] | `BehaviorEvaluator` trait                                       |
//! | [`noop`]      | `NoopEvaluator`: starts trees, never produces intents           |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The tree itself is an external collaborator.  Each controller tick runs
//! in two phases:
//!
//! 1. **Evaluate**: `BehaviorEvaluator::evaluate` reads the blackboard
//!    through `&EvalContext` and returns `Vec<Intent>`.  No mutation.
//!
//! 2. **Apply**: the controller consumes the intents and performs the writes
//!    through its own named operations (`change_own_ai_state`, perception
//!    checks, move requests).
//!
//! The evaluator therefore never holds a mutable handle on the store, and
//! every AI-state write stays inside the controller.

pub mod asset;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod intent;
pub mod noop;
pub mod unit;

#[cfg(test)]
mod tests;

pub use asset::{BehaviorAsset, TreeRole};
pub use context::EvalContext;
pub use error::{BehaviorError, BehaviorResult};
pub use evaluator::BehaviorEvaluator;
pub use intent::{FlagKey, Intent, PerceptionCheck};
pub use noop::NoopEvaluator;
pub use unit::{PossessedUnit, UnitDescriptor};
