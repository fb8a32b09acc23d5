//! Fluent builder for constructing an [`EnemyController`].

use ec_behavior::BehaviorEvaluator;
use ec_core::ControllerConfig;

use crate::{ControllerResult, EnemyController};

/// Fluent builder for [`EnemyController<E>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                 |
/// |-------------------|-----------------------------------------|
/// | `.config(c)`      | `ControllerConfig::default()`           |
/// | `.aggro_range(r)` | `ControllerConfig::DEFAULT_AGGRO_RANGE` |
/// | `.seed(s)`        | `0`                                     |
///
/// # Example
///
/// ```rust,ignore
/// let controller = ControllerBuilder::new(NoopEvaluator::default())
///     .aggro_range(600.0)
///     .seed(42)
///     .build()?;
/// ```
pub struct ControllerBuilder<E: BehaviorEvaluator> {
    config:    ControllerConfig,
    evaluator: E,
}

impl<E: BehaviorEvaluator> ControllerBuilder<E> {
    pub fn new(evaluator: E) -> Self {
        Self { config: ControllerConfig::default(), evaluator }
    }

    /// Replace the whole configuration.  Later `.aggro_range` / `.seed`
    /// calls still apply on top.
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn aggro_range(mut self, range: f32) -> Self {
        self.config.aggro_range = range;
        self
    }

    /// Seed for the guard-point sampler.  Mixed with the unit id at
    /// possession, so controllers sharing a seed still sample differently.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration and return an unbound controller.
    pub fn build(self) -> ControllerResult<EnemyController<E>> {
        self.config.validate()?;
        Ok(EnemyController::new(self.config, self.evaluator))
    }
}
