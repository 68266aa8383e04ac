//! Dense, validated form of a game.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionId, JointAction, PlayerPair};
use crate::error::ConfigError;

use super::{Game, RewardTable, NUM_STAGES};

/// A game compiled to dense index space.
///
/// `state_names(h)` lists stage-h states in dense-index order; reward tables
/// and the transition matrix are indexed the same way, so the learning
/// engine's hot loop touches only contiguous arrays and small integers.
///
/// Compilation enforces the game contract: a non-empty, densely numbered
/// action set, at least one state per stage, a square reward table per state,
/// and a transition function that is total over `actions x actions` with
/// every target among the stage-2 states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameTable {
    name: String,
    actions: SmallVec<[ActionId; 4]>,
    states: [Vec<String>; NUM_STAGES],
    /// `rewards[h - 1][state index]`, same order as `states`.
    rewards: [Vec<RewardTable>; NUM_STAGES],
    /// Row-major `transition[a1 * num_actions + a2]` = stage-2 state index.
    transition: Vec<usize>,
}

impl GameTable {
    /// Compile and validate a game.
    pub fn compile(game: &dyn Game) -> Result<Self, ConfigError> {
        let actions: SmallVec<[ActionId; 4]> = SmallVec::from_slice(game.actions());
        if actions.is_empty() {
            return Err(ConfigError::EmptyActionSet);
        }
        for (position, action) in actions.iter().enumerate() {
            if action.index() != position {
                return Err(ConfigError::ActionNumbering {
                    position,
                    found: action.0,
                });
            }
        }
        let num_actions = actions.len();

        let mut states: [Vec<String>; NUM_STAGES] = Default::default();
        let mut rewards: [Vec<RewardTable>; NUM_STAGES] = Default::default();
        for stage in 1..=NUM_STAGES {
            let names = game.state_names(stage);
            if names.is_empty() {
                return Err(ConfigError::EmptyStage { stage });
            }
            for name in names {
                let table =
                    game.reward_table(stage, name)
                        .ok_or_else(|| ConfigError::MissingRewards {
                            stage,
                            state: name.clone(),
                        })?;
                if table.num_actions() != num_actions {
                    return Err(ConfigError::RewardShape {
                        stage,
                        state: name.clone(),
                        found: table.num_actions(),
                        expected: num_actions,
                    });
                }
                rewards[stage - 1].push(table.clone());
            }
            states[stage - 1] = names.to_vec();
        }

        let mut transition = Vec::with_capacity(num_actions * num_actions);
        for &a1 in &actions {
            for &a2 in &actions {
                let joint = JointAction::new(a1, a2);
                let target = game
                    .transition(joint)
                    .ok_or(ConfigError::PartialTransition { joint })?;
                let index = states[1].iter().position(|s| s == target).ok_or_else(|| {
                    ConfigError::UnknownTransitionTarget {
                        joint,
                        state: target.to_string(),
                    }
                })?;
                transition.push(index);
            }
        }

        Ok(Self {
            name: game.name().to_string(),
            actions,
            states,
            rewards,
            transition,
        })
    }

    /// The source game's identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered action set shared by both players.
    #[must_use]
    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }

    /// Number of actions per player.
    #[must_use]
    pub fn num_actions(&self) -> usize {
        self.actions.len()
    }

    /// Number of states at a stage (1-based).
    #[must_use]
    pub fn num_states(&self, stage: usize) -> usize {
        self.states[stage - 1].len()
    }

    /// Largest per-stage state count; value tensors are sized to this.
    #[must_use]
    pub fn max_states(&self) -> usize {
        self.states.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Name of a state by stage and dense index.
    #[must_use]
    pub fn state_name(&self, stage: usize, state: usize) -> &str {
        &self.states[stage - 1][state]
    }

    /// Reward table of a state by stage and dense index.
    #[must_use]
    pub fn reward_table(&self, stage: usize, state: usize) -> &RewardTable {
        &self.rewards[stage - 1][state]
    }

    /// Per-player rewards for a joint action at a stage/state.
    #[must_use]
    pub fn reward(&self, stage: usize, state: usize, a1: ActionId, a2: ActionId) -> PlayerPair<f64> {
        self.rewards[stage - 1][state].get(a1, a2)
    }

    /// Dense index of the stage-2 state reached from a stage-1 joint action.
    #[must_use]
    pub fn next_state_index(&self, joint: JointAction) -> usize {
        let (a1, a2) = joint.pair();
        self.transition[a1.index() * self.num_actions() + a2.index()]
    }

    /// Largest absolute reward magnitude across the whole game.
    #[must_use]
    pub fn max_abs_reward(&self) -> f64 {
        self.rewards
            .iter()
            .flatten()
            .fold(0.0, |max, table| max.max(table.max_abs()))
    }

    /// An independent copy with every reward divided by the global maximum
    /// absolute magnitude and rounded to `precision` decimal places.
    ///
    /// A game whose rewards are identically zero is returned unchanged.
    #[must_use]
    pub fn normalized(&self, precision: u32) -> GameTable {
        let max = self.max_abs_reward();
        if max == 0.0 {
            return self.clone();
        }

        debug!("normalizing rewards of `{}` by {}", self.name, max);

        let mut copy = self.clone();
        for stage_tables in &mut copy.rewards {
            for table in stage_tables {
                *table = table.scaled(max, precision);
            }
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::{StagHuntGame, TreasureGame};

    fn compiled_treasure() -> GameTable {
        GameTable::compile(&TreasureGame::new()).unwrap()
    }

    #[test]
    fn test_compile_treasure() {
        let table = compiled_treasure();
        assert_eq!(table.name(), "treasure");
        assert_eq!(table.num_actions(), 2);
        assert_eq!(table.num_states(1), 1);
        assert_eq!(table.num_states(2), 3);
        assert_eq!(table.max_states(), 3);
        assert_eq!(table.state_name(1, 0), "s1");
    }

    #[test]
    fn test_transition_indices_follow_state_order() {
        let table = compiled_treasure();
        let a0 = ActionId::new(0);
        let a1 = ActionId::new(1);

        let to_name = |joint| {
            let idx = table.next_state_index(joint);
            table.state_name(2, idx).to_string()
        };

        assert_eq!(to_name(JointAction::new(a0, a0)), "A");
        assert_eq!(to_name(JointAction::new(a1, a1)), "B");
        assert_eq!(to_name(JointAction::new(a0, a1)), "O");
        assert_eq!(to_name(JointAction::new(a1, a0)), "O");
    }

    #[test]
    fn test_max_abs_reward() {
        assert_eq!(compiled_treasure().max_abs_reward(), 2.0);

        let staghunt = GameTable::compile(&StagHuntGame::new()).unwrap();
        assert_eq!(staghunt.max_abs_reward(), 3.75);
    }

    #[test]
    fn test_normalized_scales_and_rounds() {
        let table = GameTable::compile(&StagHuntGame::new()).unwrap().normalized(2);
        let p0 = PlayerId::new(0);
        let a0 = ActionId::new(0);
        let a1 = ActionId::new(1);

        // 3.75 / 3.75 = 1.0, 2 / 3.75 = 0.5333.. -> 0.53, 1 / 3.75 -> 0.27
        assert_eq!(table.reward(2, 0, a0, a0)[p0], 1.0);
        assert_eq!(table.reward(1, 0, a1, a0)[p0], 0.53);
        assert_eq!(table.reward(1, 0, a1, a1)[p0], 0.27);
        assert_eq!(table.max_abs_reward(), 1.0);
    }

    #[test]
    fn test_normalized_does_not_touch_original() {
        let table = compiled_treasure();
        let _ = table.normalized(2);
        assert_eq!(table.max_abs_reward(), 2.0);
    }

    #[test]
    fn test_serialization() {
        let table = compiled_treasure();
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: GameTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }
}
