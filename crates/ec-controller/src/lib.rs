//! `ec-controller`: the per-unit enemy AI controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`state`]      | `UnitState`: owned blackboard + forced-move tracking             |
//! | [`controller`] | `EnemyController<E>`: possession, completion handler, tick       |
//! | [`command`]    | Commander entry points (engage, seek, seek-at-point, guard)      |
//! | [`perception`] | Perception checks (LoS, aggro range, guard area, known location) |
//! | [`event`]      | `ControllerEvent`, `CommandKind`, `StateCause`                   |
//! | [`snapshot`]   | `StateSnapshot`: one row of controller state for output          |
//! | [`observer`]   | `ControllerObserver` trait, `NoopObserver`                       |
//! | [`builder`]    | `ControllerBuilder`                                              |
//! | [`pool`]       | `ControllerPool<E>`: many controllers over one arena             |
//! | [`error`]      | `ControllerError`, `ControllerResult<T>`                         |
//!
//! # Pool step
//!
//! ```text
//! for each step:
//!   ① Movement     NavigationEngine::advance(dt); positions mirrored into
//!                  the arena.
//!   ② Completions  every MoveCompletion routed to its controller's
//!                  on_move_completed.
//!   ③ Perception   configured checks for every controller
//!                  (parallel with the `parallel` feature).
//!   ④ Evaluate     BehaviorEvaluator::evaluate, then intents applied in
//!                  order, one controller at a time.
//!   ⑤ Events       each controller's journal drained to the observer.
//!   ⑥ Snapshot     every `snapshot_interval` steps.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Runs the perception phase on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ec_behavior::NoopEvaluator;
//! use ec_controller::{ControllerBuilder, ControllerPool, NoopObserver};
//!
//! let mut pool = ControllerPool::new(arena, NavigationEngine::new(400.0)?);
//! let controller = ControllerBuilder::new(NoopEvaluator::default()).build()?;
//! pool.possess(&unit, controller)?;
//! pool.command(unit.actor, |c, world, nav| c.guard_point(objective, player, world, nav))?;
//! pool.run(100, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod command;
pub mod controller;
pub mod error;
pub mod event;
pub mod observer;
pub mod perception;
pub mod pool;
pub mod snapshot;
pub mod state;


pub use builder::ControllerBuilder;
pub use controller::EnemyController;
pub use error::{ControllerError, ControllerResult};
pub use event::{CommandKind, ControllerEvent, StateCause};
pub use observer::{ControllerObserver, NoopObserver};
pub use pool::ControllerPool;
pub use snapshot::StateSnapshot;
pub use state::UnitState;
