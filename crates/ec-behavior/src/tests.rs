//! Unit tests for ec-behavior.

use std::sync::Arc;

use ec_blackboard::{standard_schema, Blackboard, BlackboardKeys};
use ec_core::{ActorId, AiState, UnitRng, Vec3};

use crate::{
    BehaviorAsset, BehaviorEvaluator, EvalContext, FlagKey, Intent, NoopEvaluator,
    PerceptionCheck, PossessedUnit, TreeRole, UnitDescriptor,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn make_board() -> (Blackboard, BlackboardKeys) {
    let schema = Arc::new(standard_schema());
    let keys = BlackboardKeys::resolve(&schema).unwrap();
    (Blackboard::new(schema), keys)
}

fn make_asset(name: &str) -> BehaviorAsset {
    BehaviorAsset::new(name, Arc::new(standard_schema()))
}

// ── UnitDescriptor ────────────────────────────────────────────────────────────

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn bare_descriptor_has_no_assets() {
        let unit = UnitDescriptor::new(ActorId(3), "Grunt");
        assert_eq!(unit.actor(), ActorId(3));
        assert_eq!(unit.unit_type(), "Grunt");
        assert!(unit.unit_behavior().is_none());
        assert!(unit.combat_behavior().is_none());
    }

    #[test]
    fn builder_attaches_assets() {
        let unit = UnitDescriptor::new(ActorId(3), "Grunt")
            .with_behavior(make_asset("BT_Grunt"))
            .with_combat(make_asset("BT_GruntCombat"));
        assert_eq!(unit.unit_behavior().unwrap().name, "BT_Grunt");
        assert_eq!(unit.combat_behavior().unwrap().name, "BT_GruntCombat");
    }
}

// ── EvalContext ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn unset_board_reads_as_defaults() {
        let (board, keys) = make_board();
        let ctx = EvalContext::new(ActorId(0), 0, &board, &keys);
        assert_eq!(ctx.ai_state(), None);
        assert_eq!(ctx.current_enemy(), None);
        assert!(!ctx.have_los());
        assert!(!ctx.enemy_in_aggro_range());
        assert!(!ctx.is_executing_command());
    }

    #[test]
    fn reads_written_values() {
        let (mut board, keys) = make_board();
        board.set_enum(keys.ai_state, AiState::Seek.as_u8()).unwrap();
        board.set_object(keys.current_enemy, ActorId(9)).unwrap();
        board.set_vector(keys.known_enemy_location, Vec3::X).unwrap();
        board.set_bool(keys.have_los, true).unwrap();

        let ctx = EvalContext::new(ActorId(0), 5, &board, &keys);
        assert_eq!(ctx.step, 5);
        assert_eq!(ctx.ai_state(), Some(AiState::Seek));
        assert_eq!(ctx.current_enemy(), Some(ActorId(9)));
        assert_eq!(ctx.known_enemy_location(), Some(Vec3::X));
        assert!(ctx.have_los());
    }

    #[test]
    fn out_of_range_state_reads_as_unset() {
        let (mut board, keys) = make_board();
        board.set_enum(keys.ai_state, 200).unwrap();
        let ctx = EvalContext::new(ActorId(0), 0, &board, &keys);
        assert_eq!(ctx.ai_state(), None);
    }
}

// ── Intent ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn variants_compare() {
        assert_eq!(
            Intent::ChangeOwnAiState(AiState::Flee),
            Intent::ChangeOwnAiState(AiState::Flee)
        );
        assert_ne!(
            Intent::Perceive(PerceptionCheck::LineOfSight),
            Intent::Perceive(PerceptionCheck::AggroRange)
        );
        assert_eq!(
            Intent::SetFlag(FlagKey::EnemyInLeashRange, true),
            Intent::SetFlag(FlagKey::EnemyInLeashRange, true)
        );
    }
}

// ── NoopEvaluator ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod noop_tests {
    use super::*;

    #[test]
    fn records_started_trees() {
        let mut eval = NoopEvaluator::default();
        eval.start_tree(TreeRole::Root, &make_asset("BT_Root")).unwrap();
        eval.start_tree(TreeRole::Combat, &make_asset("BT_Combat")).unwrap();
        assert_eq!(
            eval.started(),
            &[(TreeRole::Root, "BT_Root".to_owned()), (TreeRole::Combat, "BT_Combat".to_owned())]
        );
        eval.stop();
        assert!(eval.started().is_empty());
    }

    #[test]
    fn evaluate_returns_empty() {
        let (board, keys) = make_board();
        let ctx = EvalContext::new(ActorId(0), 0, &board, &keys);
        let mut rng = UnitRng::new(0, ActorId(0));
        assert!(NoopEvaluator::default().evaluate(&ctx, &mut rng).is_empty());
    }
}
