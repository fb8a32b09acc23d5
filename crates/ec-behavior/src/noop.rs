//! A no-op evaluator: trees start, nothing is ever requested.

use ec_core::UnitRng;

use crate::{BehaviorAsset, BehaviorEvaluator, BehaviorResult, EvalContext, Intent, TreeRole};

/// A [`BehaviorEvaluator`] that accepts any asset and always returns an empty
/// intent list.
///
/// Useful in tests where only commands and perception drive the blackboard.
#[derive(Default)]
pub struct NoopEvaluator {
    started: Vec<(TreeRole, String)>,
}

impl NoopEvaluator {
    /// Trees started so far, in order, as `(role, asset name)`.
    pub fn started(&self) -> &[(TreeRole, String)] {
        &self.started
    }
}

impl BehaviorEvaluator for NoopEvaluator {
    fn start_tree(&mut self, role: TreeRole, asset: &BehaviorAsset) -> BehaviorResult<()> {
        self.started.push((role, asset.name.clone()));
        Ok(())
    }

    fn evaluate(&mut self, _ctx: &EvalContext<'_>, _rng: &mut UnitRng) -> Vec<Intent> {
        vec![]
    }

    fn stop(&mut self) {
        self.started.clear();
    }
}
