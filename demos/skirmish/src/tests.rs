//! Unit tests for the skirmish evaluator.

use std::sync::Arc;

use ec_behavior::{BehaviorEvaluator, EvalContext, Intent};
use ec_blackboard::{standard_schema, Blackboard, BlackboardKeys};
use ec_core::{ActorId, AiState, UnitRng, Vec3};

use crate::evaluator::SkirmishEvaluator;

const UNIT: ActorId = ActorId(3);

/// An engaged unit whose last sighting of the player is `seen_at`.
fn engaged(have_los: bool, in_range: bool, seen_at: Vec3) -> (Blackboard, BlackboardKeys) {
    let schema = Arc::new(standard_schema());
    let keys = BlackboardKeys::resolve(&schema).unwrap();
    let mut board = Blackboard::new(schema);
    board.set_enum(keys.ai_state, AiState::Engage.as_u8()).unwrap();
    board.set_object(keys.current_enemy, ActorId(0)).unwrap();
    board.set_bool(keys.have_los, have_los).unwrap();
    board.set_bool(keys.enemy_in_aggro_range, in_range).unwrap();
    board.set_vector(keys.known_enemy_location, seen_at).unwrap();
    (board, keys)
}

#[cfg(test)]
mod evaluator_tests {
    use super::*;

    #[test]
    fn lost_sight_falls_back_to_seek_without_refreshing_location() {
        let (board, keys) = engaged(false, true, Vec3::new(10.0, 20.0, 0.0));
        let ctx = EvalContext::new(UNIT, 4, &board, &keys);
        let intents = SkirmishEvaluator::default().evaluate(&ctx, &mut UnitRng::new(1, UNIT));
        assert_eq!(intents, vec![Intent::ChangeOwnAiState(AiState::Seek)]);
    }

    #[test]
    fn engaged_in_range_holds_without_writing_flags() {
        let (board, keys) = engaged(true, true, Vec3::ZERO);
        let ctx = EvalContext::new(UNIT, 4, &board, &keys);
        let intents = SkirmishEvaluator::default().evaluate(&ctx, &mut UnitRng::new(1, UNIT));
        assert!(intents.is_empty());
    }
}
