//! Treasure-hunt benchmark game.
//!
//! Stage 1 has the single state `s1`. Searching together `(0, 0)` leads to a
//! shallow cave `A` with a modest prize, digging together `(1, 1)` to a
//! vault `B` where cooperation pays full value but joint digging is punished
//! asymmetrically, and any split choice to open ground `O`.

use rustc_hash::FxHashMap;

use crate::core::{ActionId, JointAction};

use super::{Game, RewardTable, INITIAL_STATE};

/// The treasure-hunt game.
#[derive(Clone, Debug)]
pub struct TreasureGame {
    actions: Vec<ActionId>,
    names: [Vec<String>; 2],
    tables: [FxHashMap<String, RewardTable>; 2],
}

impl TreasureGame {
    #[must_use]
    pub fn new() -> Self {
        let actions = vec![ActionId::new(0), ActionId::new(1)];

        let names = [
            vec![INITIAL_STATE.to_string()],
            vec!["A".to_string(), "B".to_string(), "O".to_string()],
        ];

        let mut stage1 = FxHashMap::default();
        stage1.insert(
            INITIAL_STATE.to_string(),
            RewardTable::from_rows(&[
                &[(1.0, 1.0), (0.0, 0.0)],
                &[(0.0, 0.0), (0.0, 0.0)],
            ]),
        );

        let mut stage2 = FxHashMap::default();
        stage2.insert(
            "A".to_string(),
            RewardTable::from_rows(&[
                &[(0.5, 0.5), (0.0, 0.0)],
                &[(0.0, 0.0), (0.0, 0.0)],
            ]),
        );
        stage2.insert(
            "B".to_string(),
            RewardTable::from_rows(&[
                &[(1.0, 1.0), (0.0, 0.0)],
                &[(0.0, 0.0), (-2.0, 2.0)],
            ]),
        );
        stage2.insert(
            "O".to_string(),
            RewardTable::from_rows(&[
                &[(1.0, 1.0), (0.0, 0.0)],
                &[(0.0, 0.0), (0.0, 0.0)],
            ]),
        );

        Self {
            actions,
            names,
            tables: [stage1, stage2],
        }
    }
}

impl Default for TreasureGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TreasureGame {
    fn name(&self) -> &str {
        "treasure"
    }

    fn actions(&self) -> &[ActionId] {
        &self.actions
    }

    fn state_names(&self, stage: usize) -> &[String] {
        &self.names[stage - 1]
    }

    fn reward_table(&self, stage: usize, state: &str) -> Option<&RewardTable> {
        self.tables[stage - 1].get(state)
    }

    fn transition(&self, joint: JointAction) -> Option<&str> {
        let (a1, a2) = joint.pair();
        Some(match (a1.index(), a2.index()) {
            (0, 0) => "A",
            (1, 1) => "B",
            _ => "O",
        })
    }
}
