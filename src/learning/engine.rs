//! The learning engine: one instance, one trajectory.
//!
//! The engine owns the Q/V tensors, the per-state joint actions and hidden
//! variables, and an explicitly seeded generator. Each iteration sweeps the
//! stages from last to first; per stage the rule first proposes new
//! variables for every state from the same pre-update snapshot (actor), then
//! the critic refreshes V and Q from the *previous* joint action, and only
//! then are the proposals committed. Stage order matters: the stage-1 Q
//! update reads the stage-2 V refreshed in the same iteration.
//!
//! `run` consumes the engine, so a trajectory cannot be advanced twice; the
//! final tensors, policy, and histories come back in a [`LearningOutcome`].

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionId, JointAction, PlayerId, PlayerPair, SimRng};
use crate::error::ConfigError;
use crate::games::{Game, GameTable, NUM_STAGES};
use crate::rules::{LearningRule, QSlice, StateVars};

use super::history::RunHistory;
use super::values::{QTensor, VTensor};

/// Dense index of the initial state within stage 1.
pub const INITIAL_STATE_INDEX: usize = 0;

/// A single learning trajectory over one game with one rule.
pub struct UnifiedLearner<'r> {
    game: GameTable,
    rule: &'r dyn LearningRule,
    iterations: usize,
    rng: SimRng,
    q: QTensor,
    v: VTensor,
    /// `vars[stage - 1][state]`, committed once per stage per iteration.
    vars: [Vec<StateVars>; NUM_STAGES],
    history: RunHistory,
}

impl<'r> UnifiedLearner<'r> {
    /// Build and initialize a learner.
    ///
    /// Compiles (and, when the rule requires it, normalizes) the game, seeds
    /// the Q tensor from immediate rewards, and randomizes every state's
    /// joint action and hidden pair. All validation happens here; the run
    /// itself cannot fail.
    pub fn new(
        game: &dyn Game,
        rule: &'r dyn LearningRule,
        iterations: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut table = GameTable::compile(game)?;
        if rule.normalizes_rewards() {
            table = table.normalized(rule.reward_precision());
        }

        let mut rng = SimRng::new(seed);
        let mut q = QTensor::zeros(table.max_states(), table.num_actions());
        let v = VTensor::zeros(table.max_states());

        // Q starts at the immediate rewards: an uninformed prior that
        // ignores future value.
        for stage in 1..=NUM_STAGES {
            for state in 0..table.num_states(stage) {
                for &a1 in table.actions() {
                    for &a2 in table.actions() {
                        let reward = table.reward(stage, state, a1, a2);
                        for player in PlayerId::both() {
                            q.set(player, stage, state, a1, a2, reward[player]);
                        }
                    }
                }
            }
        }

        let mut vars: [Vec<StateVars>; NUM_STAGES] = Default::default();
        for stage in 1..=NUM_STAGES {
            vars[stage - 1] = (0..table.num_states(stage))
                .map(|_| StateVars {
                    action: JointAction::new(
                        random_action(&mut rng, table.actions()),
                        random_action(&mut rng, table.actions()),
                    ),
                    hidden: rule.initial_hidden(&mut rng),
                })
                .collect();
        }

        debug!(
            "initialized learner: game={}, rule={}, iterations={}, seed={}",
            table.name(),
            rule.name(),
            iterations,
            seed
        );

        Ok(Self {
            game: table,
            rule,
            iterations,
            rng,
            q,
            v,
            vars,
            history: RunHistory::with_capacity(iterations),
        })
    }

    /// Number of iterations this learner will run.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run the full learning cycle and expose the final read surface.
    #[must_use]
    pub fn run(mut self) -> LearningOutcome {
        for t in 0..self.iterations {
            self.step(t);
        }

        debug!(
            "run complete: game={}, final action at initial state={}",
            self.game.name(),
            self.vars[0][INITIAL_STATE_INDEX].action
        );

        let policy = [
            self.vars[0].iter().map(|v| v.action).collect(),
            self.vars[1].iter().map(|v| v.action).collect(),
        ];

        LearningOutcome {
            game: self.game,
            q: self.q,
            v: self.v,
            policy,
            history: self.history,
        }
    }

    /// One learning iteration (zero-based index `t`).
    fn step(&mut self, t: usize) {
        let actions: SmallVec<[ActionId; 4]> = SmallVec::from_slice(self.game.actions());

        // Value tensor as it stood before this iteration's updates: both the
        // history sample and the running-mean base read from it.
        let v_start = self.v.clone();
        self.history
            .record_value(v_start.get(PlayerId::new(0), 1, INITIAL_STATE_INDEX));

        for stage in (1..=NUM_STAGES).rev() {
            let num_states = self.game.num_states(stage);

            // Actor: propose new variables for every state, all from the
            // pre-update snapshot.
            let mut proposals = Vec::with_capacity(num_states);
            for state in 0..num_states {
                let q_slice = self.q_slice(stage, state);
                proposals.push(self.rule.update_vars(
                    &self.vars[stage - 1][state],
                    &actions,
                    &q_slice,
                    &mut self.rng,
                ));
            }

            // Critic: refresh V and Q from the previous joint action.
            for state in 0..num_states {
                let joint = self.vars[stage - 1][state].action;

                for player in PlayerId::both() {
                    let sample = self.q.get_joint(player, stage, state, joint);
                    let value = if t == 0 {
                        sample
                    } else {
                        // Running mean over the realized Q samples, weighted
                        // so iteration t contributes 1/(t+1).
                        let old = v_start.get(player, stage, state);
                        (t as f64 / (t as f64 + 1.0)) * old + sample / (t as f64 + 1.0)
                    };
                    self.v.set(player, stage, state, value);
                }

                for player in PlayerId::both() {
                    for &a1 in &actions {
                        for &a2 in &actions {
                            let expected = if stage < NUM_STAGES {
                                // Stages run last to first, so this reads the
                                // next stage's V as refreshed this iteration.
                                let next = self.game.next_state_index(JointAction::new(a1, a2));
                                self.v.get(player, stage + 1, next)
                            } else {
                                0.0
                            };
                            let reward = self.game.reward(stage, state, a1, a2)[player];
                            self.q.set(player, stage, state, a1, a2, reward + expected);
                        }
                    }
                }
            }

            // Commit the stage's proposals.
            self.vars[stage - 1] = proposals;
        }

        self.history
            .record_action(self.vars[0][INITIAL_STATE_INDEX].action);
    }

    /// Copy one stage/state's Q-values into the rule-facing view.
    fn q_slice(&self, stage: usize, state: usize) -> QSlice {
        let n = self.game.num_actions();
        let values = PlayerPair::from_fn(|player| {
            let mut row = Vec::with_capacity(n * n);
            for &a1 in self.game.actions() {
                for &a2 in self.game.actions() {
                    row.push(self.q.get(player, stage, state, a1, a2));
                }
            }
            row
        });
        QSlice::new(n, values)
    }
}

fn random_action(rng: &mut SimRng, actions: &[ActionId]) -> ActionId {
    actions[rng.gen_range_usize(0..actions.len())]
}

/// Final read surface of a completed trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningOutcome {
    game: GameTable,
    q: QTensor,
    v: VTensor,
    policy: [Vec<JointAction>; NUM_STAGES],
    history: RunHistory,
}

impl LearningOutcome {
    /// The game the trajectory actually ran on (normalized when the rule
    /// required it).
    #[must_use]
    pub fn game(&self) -> &GameTable {
        &self.game
    }

    /// Final action-value estimates.
    #[must_use]
    pub fn q(&self) -> &QTensor {
        &self.q
    }

    /// Final state-value estimates.
    #[must_use]
    pub fn v(&self) -> &VTensor {
        &self.v
    }

    /// Final learned joint action for a stage/state.
    #[must_use]
    pub fn policy(&self, stage: usize, state: usize) -> JointAction {
        self.policy[stage - 1][state]
    }

    /// The trajectory's convergence history.
    #[must_use]
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Initial-state value samples, one per iteration.
    #[must_use]
    pub fn value_history(&self) -> &[f64] {
        self.history.values()
    }

    /// Initial-state joint actions, one per iteration.
    #[must_use]
    pub fn action_history(&self) -> &[JointAction] {
        self.history.actions()
    }

    /// Extract the history, dropping the tensors.
    #[must_use]
    pub fn into_history(self) -> RunHistory {
        self.history
    }
}
