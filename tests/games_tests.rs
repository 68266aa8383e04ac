//! Game-contract validation tests.
//!
//! Malformed games must fail at compilation, before any engine runs.

use equilearn::core::{ActionId, JointAction};
use equilearn::error::ConfigError;
use equilearn::games::{registry, Game, GameTable, RewardTable, StagHuntGame, TreasureGame};

/// A minimal configurable game for exercising each contract violation.
#[derive(Debug)]
struct TestGame {
    actions: Vec<ActionId>,
    stage1: Vec<String>,
    stage2: Vec<String>,
    stage1_table: Option<RewardTable>,
    stage2_table: Option<RewardTable>,
    transition_target: Option<&'static str>,
}

impl TestGame {
    fn well_formed() -> Self {
        let table = RewardTable::from_rows(&[
            &[(1.0, 1.0), (0.0, 0.0)],
            &[(0.0, 0.0), (0.0, 0.0)],
        ]);
        Self {
            actions: vec![ActionId::new(0), ActionId::new(1)],
            stage1: vec!["s1".to_string()],
            stage2: vec!["end".to_string()],
            stage1_table: Some(table.clone()),
            stage2_table: Some(table),
            transition_target: Some("end"),
        }
    }
}

impl Game for TestGame {
    fn name(&self) -> &str {
        "testgame"
    }

    fn actions(&self) -> &[ActionId] {
        &self.actions
    }

    fn state_names(&self, stage: usize) -> &[String] {
        if stage == 1 {
            &self.stage1
        } else {
            &self.stage2
        }
    }

    fn reward_table(&self, stage: usize, _state: &str) -> Option<&RewardTable> {
        if stage == 1 {
            self.stage1_table.as_ref()
        } else {
            self.stage2_table.as_ref()
        }
    }

    fn transition(&self, _joint: JointAction) -> Option<&str> {
        self.transition_target
    }
}

#[test]
fn test_well_formed_game_compiles() {
    let table = GameTable::compile(&TestGame::well_formed()).unwrap();
    assert_eq!(table.num_actions(), 2);
    assert_eq!(table.num_states(2), 1);
}

#[test]
fn test_empty_action_set_is_rejected() {
    let mut game = TestGame::well_formed();
    game.actions.clear();
    assert_eq!(
        GameTable::compile(&game).unwrap_err(),
        ConfigError::EmptyActionSet
    );
}

#[test]
fn test_sparse_action_numbering_is_rejected() {
    let mut game = TestGame::well_formed();
    game.actions = vec![ActionId::new(0), ActionId::new(2)];
    assert_eq!(
        GameTable::compile(&game).unwrap_err(),
        ConfigError::ActionNumbering {
            position: 1,
            found: 2
        }
    );
}

#[test]
fn test_empty_stage_is_rejected() {
    let mut game = TestGame::well_formed();
    game.stage2.clear();
    assert_eq!(
        GameTable::compile(&game).unwrap_err(),
        ConfigError::EmptyStage { stage: 2 }
    );
}

#[test]
fn test_missing_reward_table_is_rejected() {
    let mut game = TestGame::well_formed();
    game.stage2_table = None;
    assert_eq!(
        GameTable::compile(&game).unwrap_err(),
        ConfigError::MissingRewards {
            stage: 2,
            state: "end".to_string()
        }
    );
}

#[test]
fn test_reward_shape_mismatch_is_rejected() {
    let mut game = TestGame::well_formed();
    game.stage2_table = Some(RewardTable::from_rows(&[&[(1.0, 1.0)]]));
    assert_eq!(
        GameTable::compile(&game).unwrap_err(),
        ConfigError::RewardShape {
            stage: 2,
            state: "end".to_string(),
            found: 1,
            expected: 2
        }
    );
}

#[test]
fn test_partial_transition_is_rejected() {
    let mut game = TestGame::well_formed();
    game.transition_target = None;
    assert!(matches!(
        GameTable::compile(&game).unwrap_err(),
        ConfigError::PartialTransition { .. }
    ));
}

#[test]
fn test_transition_to_unknown_state_is_rejected() {
    let mut game = TestGame::well_formed();
    game.transition_target = Some("nowhere");
    assert!(matches!(
        GameTable::compile(&game).unwrap_err(),
        ConfigError::UnknownTransitionTarget { ref state, .. } if state == "nowhere"
    ));
}

#[test]
fn test_treasure_transitions() {
    let game = TreasureGame::new();
    let joint = |a1, a2| JointAction::new(ActionId::new(a1), ActionId::new(a2));

    assert_eq!(game.transition(joint(0, 0)), Some("A"));
    assert_eq!(game.transition(joint(1, 1)), Some("B"));
    assert_eq!(game.transition(joint(0, 1)), Some("O"));
    assert_eq!(game.transition(joint(1, 0)), Some("O"));
}

#[test]
fn test_staghunt_transitions() {
    let game = StagHuntGame::new();
    let joint = |a1, a2| JointAction::new(ActionId::new(a1), ActionId::new(a2));

    assert_eq!(game.transition(joint(0, 0)), Some("A"));
    for (a1, a2) in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(game.transition(joint(a1, a2)), Some("B"));
    }
}

#[test]
fn test_registry_round_trip() {
    for name in registry::GAME_NAMES {
        let game = registry::build_game(name).unwrap();
        // Every bundled game satisfies the contract.
        GameTable::compile(game.as_ref()).unwrap();
    }
    assert!(registry::build_game("prisoners").is_err());
}

#[test]
fn test_normalization_divides_by_global_max() {
    let table = GameTable::compile(&StagHuntGame::new()).unwrap();
    let normalized = table.normalized(2);

    let a0 = ActionId::new(0);
    let a1 = ActionId::new(1);

    for stage in 1..=2 {
        for state in 0..table.num_states(stage) {
            for &x in &[a0, a1] {
                for &y in &[a0, a1] {
                    let original = table.reward(stage, state, x, y);
                    let scaled = normalized.reward(stage, state, x, y);
                    for player in equilearn::core::PlayerId::both() {
                        let expected = (original[player] / 3.75 * 100.0).round() / 100.0;
                        assert_eq!(scaled[player], expected);
                    }
                }
            }
        }
    }
}
