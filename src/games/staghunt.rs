//! Two-stage stag hunt.
//!
//! Hunting the stag together `(0, 0)` leads to state `A`, where the stag is
//! within reach and joint hunting pays 3.75 each; any defection to hares
//! leads to `B`, where the stag opportunity is gone and the stage game is the
//! plain hare/stag payoff matrix again.

use rustc_hash::FxHashMap;

use crate::core::{ActionId, JointAction};

use super::{Game, RewardTable, INITIAL_STATE};

/// The two-stage stag-hunt game.
#[derive(Clone, Debug)]
pub struct StagHuntGame {
    actions: Vec<ActionId>,
    names: [Vec<String>; 2],
    tables: [FxHashMap<String, RewardTable>; 2],
}

impl StagHuntGame {
    #[must_use]
    pub fn new() -> Self {
        let actions = vec![ActionId::new(0), ActionId::new(1)];

        let names = [
            vec![INITIAL_STATE.to_string()],
            vec!["A".to_string(), "B".to_string()],
        ];

        let base = RewardTable::from_rows(&[
            &[(0.0, 0.0), (0.0, 2.0)],
            &[(2.0, 0.0), (1.0, 1.0)],
        ]);

        let mut stage1 = FxHashMap::default();
        stage1.insert(INITIAL_STATE.to_string(), base.clone());

        let mut stage2 = FxHashMap::default();
        stage2.insert(
            "A".to_string(),
            RewardTable::from_rows(&[
                &[(3.75, 3.75), (0.0, 2.0)],
                &[(2.0, 0.0), (1.0, 1.0)],
            ]),
        );
        stage2.insert("B".to_string(), base);

        Self {
            actions,
            names,
            tables: [stage1, stage2],
        }
    }
}

impl Default for StagHuntGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for StagHuntGame {
    fn name(&self) -> &str {
        "staghunt"
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
        Some(if a1.index() == 0 && a2.index() == 0 {
            "A"
        } else {
            "B"
        })
    }
}
