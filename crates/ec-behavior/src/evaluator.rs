//! The `BehaviorEvaluator` trait: the plug-in point for tree implementations.

use ec_core::UnitRng;

use crate::{BehaviorAsset, BehaviorResult, EvalContext, Intent, TreeRole};

/// Pluggable behavior tree runner.
///
/// One evaluator instance is owned by one controller, so implementations may
/// keep per-unit tree state in `self`.  Blackboard reads go through
/// [`EvalContext`]; writes come back as [`Intent`]s.
///
/// # Thread safety
///
/// The controller pool may move controllers across Rayon workers, so
/// implementations must be `Send`.
///
/// # Example
///
/// ```rust,ignore
/// struct HoldGround;
///
/// impl BehaviorEvaluator for HoldGround {
///     fn start_tree(&mut self, _: TreeRole, _: &BehaviorAsset) -> BehaviorResult<()> {
///         Ok(())
///     }
///
///     fn evaluate(&mut self, ctx: &EvalContext<'_>, _: &mut UnitRng) -> Vec<Intent> {
///         match ctx.ai_state() {
///             None => vec![Intent::ChangeOwnAiState(AiState::Idle)],
///             Some(_) => vec![],
///         }
///     }
/// }
/// ```
pub trait BehaviorEvaluator: Send + 'static {
    /// Begin running `asset` in the given slot.  Starting a slot that is
    /// already running restarts it.
    fn start_tree(&mut self, role: TreeRole, asset: &BehaviorAsset) -> BehaviorResult<()>;

    /// Evaluate once and return the requested actions.  An empty `Vec` means
    /// "keep doing what you are doing".
    fn evaluate(&mut self, ctx: &EvalContext<'_>, rng: &mut UnitRng) -> Vec<Intent>;

    /// Stop every running tree.  Called on unpossess.
    ///
    /// Default: nothing to tear down.
    fn stop(&mut self) {}
}
