//! A small state-driven evaluator standing in for authored behavior trees.

use ec_behavior::{
    BehaviorAsset, BehaviorEvaluator, BehaviorResult, EvalContext, FlagKey, Intent,
    PerceptionCheck, TreeRole,
};
use ec_core::{AiState, UnitRng, Vec3};

/// Steps between repeated seek moves toward the last known location.
const RESEEK_INTERVAL: u64 = 10;

/// Units with a combat subtree hold position once engaged; the rest keep
/// closing in.
#[derive(Default)]
pub struct SkirmishEvaluator {
    has_combat: bool,
}

impl BehaviorEvaluator for SkirmishEvaluator {
    fn start_tree(&mut self, role: TreeRole, asset: &BehaviorAsset) -> BehaviorResult<()> {
        if role == TreeRole::Combat {
            tracing::debug!(asset = %asset.name, "combat subtree attached");
            self.has_combat = true;
        }
        Ok(())
    }

    fn evaluate(&mut self, ctx: &EvalContext<'_>, rng: &mut UnitRng) -> Vec<Intent> {
        match ctx.ai_state() {
            // Suspended (forced move in flight) or never commanded.
            None | Some(AiState::Idle) => vec![],

            Some(AiState::Guard) if ctx.enemy_in_guard_area() => vec![
                Intent::ChangeOwnAiState(AiState::Engage),
                Intent::SetFlag(FlagKey::IsExecutingCommand, true),
            ],
            Some(AiState::Guard) => vec![],

            Some(AiState::Seek) if ctx.have_los() && ctx.enemy_in_aggro_range() => {
                vec![Intent::ChangeOwnAiState(AiState::Engage)]
            }
            Some(AiState::Seek) => match ctx.known_enemy_location() {
                Some(target) if ctx.step % RESEEK_INTERVAL == 1 => {
                    // Spread seekers a little so they do not stack.
                    let jitter = rng.gen_range(-40.0..=40.0);
                    vec![Intent::MoveTo(target + Vec3::new(jitter, jitter, 0.0))]
                }
                _ => vec![],
            },

            // KnownEnemyLocation keeps the last sighting; seek from there.
            Some(AiState::Engage) if !ctx.have_los() => {
                vec![Intent::ChangeOwnAiState(AiState::Seek)]
            }
            Some(AiState::Engage) if !self.has_combat && !ctx.enemy_in_aggro_range() => {
                match ctx.known_enemy_location() {
                    Some(target) if ctx.step % RESEEK_INTERVAL == 1 => vec![Intent::MoveTo(target)],
                    _ => vec![],
                }
            }
            Some(AiState::Engage) => vec![],

            Some(AiState::Flee) => vec![Intent::Perceive(PerceptionCheck::SafePoint)],
        }
    }

    fn stop(&mut self) {
        self.has_combat = false;
    }
}
