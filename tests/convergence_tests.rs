//! End-to-end convergence scenarios, pinned as regression baselines.

use equilearn::core::{ActionId, JointAction};
use equilearn::games::{StagHuntGame, TreasureGame};
use equilearn::learning::{action_frequencies, TrajectoryRunner, UnifiedLearner};
use equilearn::rules::{LogLinear, MardenMood};

fn joint(a1: u8, a2: u8) -> JointAction {
    JointAction::new(ActionId::new(a1), ActionId::new(a2))
}

#[test]
fn test_treasure_loglinear_settles_on_joint_search() {
    // Near-greedy log-linear play on the treasure game: once the stage-2
    // values settle, the stage-1 row for (0, 0) dominates every alternative
    // (immediate 1.0 plus the cave value beats 0.0 plus any continuation),
    // so the chain spends most of its time at joint search. Pinned from a
    // fixed seed as a regression baseline.
    let game = TreasureGame::new();
    let rule = LogLinear::new(0.01).unwrap();
    let outcome = UnifiedLearner::new(&game, &rule, 2000, 42).unwrap().run();

    assert!(outcome.q().is_finite());
    assert!(outcome.v().is_finite());
    assert_eq!(outcome.action_history().len(), 2000);

    let tail = 100;
    let search_freq = outcome.history().tail_action_frequency(tail, joint(0, 0));
    let dig_freq = outcome.history().tail_action_frequency(tail, joint(1, 1));

    assert!(
        search_freq > 0.5,
        "expected (0, 0) to dominate the tail, got {}",
        search_freq
    );
    assert!(search_freq > dig_freq);
}

#[test]
fn test_treasure_values_stay_bounded() {
    // Rewards live in [-2, 1] and the horizon is two stages, so no estimate
    // can leave [-4, 2] under any action sequence.
    let game = TreasureGame::new();
    let rule = LogLinear::new(0.01).unwrap();
    let outcome = UnifiedLearner::new(&game, &rule, 2000, 42).unwrap().run();

    for &value in outcome.value_history() {
        assert!((-4.0..=2.0).contains(&value), "unbounded value {}", value);
    }
}

#[test]
fn test_staghunt_mood_run_is_well_behaved() {
    let game = StagHuntGame::new();
    let rule = MardenMood::new(0.02, 2.0).unwrap();
    let outcome = UnifiedLearner::new(&game, &rule, 1500, 42).unwrap().run();

    // The engine ran on a normalized copy.
    assert_eq!(outcome.game().max_abs_reward(), 1.0);

    assert!(outcome.q().is_finite());
    assert!(outcome.v().is_finite());
    assert_eq!(outcome.value_history().len(), 1500);

    // Every recorded joint action is drawn from the action set.
    let valid = [joint(0, 0), joint(0, 1), joint(1, 0), joint(1, 1)];
    for action in outcome.action_history() {
        assert!(valid.contains(action));
    }
}

#[test]
fn test_multi_run_frequency_bands_are_coherent() {
    let game = TreasureGame::new();
    let rule = LogLinear::new(0.05).unwrap();

    let outcomes = TrajectoryRunner::new(&game, &rule, 400)
        .with_seed(7)
        .run(5)
        .unwrap();
    let histories: Vec<_> = outcomes.into_iter().map(|o| o.into_history()).collect();

    let series = action_frequencies(&histories, joint(0, 0), 20.0, 80.0);
    assert_eq!(series.len(), 400);

    for t in 0..series.len() {
        assert!((0.0..=1.0).contains(&series.mean[t]));
        assert!(series.lower[t] <= series.upper[t] + 1e-12);
        assert!((0.0..=1.0).contains(&series.lower[t]));
        assert!((0.0..=1.0).contains(&series.upper[t]));
    }
}
