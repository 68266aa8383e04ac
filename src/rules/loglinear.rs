//! Log-linear (softmax) learning.

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, PlayerId, SimRng, NUM_PLAYERS};
use crate::error::ConfigError;

use super::{LearningRule, QSlice, StateVars};

/// Log-linear learning rule.
///
/// Each call picks one player uniformly at random and resamples that
/// player's action from a softmax over its Q-row, holding the other player's
/// action at its current value. Unnormalized weights are `epsilon^(-Q)`:
/// `epsilon` close to 1 explores near-uniformly, close to 0 plays
/// near-greedily. Keep `epsilon` away from the domain boundaries or the
/// exponentiation overflows.
///
/// Hidden variables are carried through unchanged; the rule has no memory.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LogLinear {
    epsilon: f64,
}

impl LogLinear {
    /// Create a log-linear rule. `epsilon` must lie strictly in (0, 1).
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(ConfigError::ParameterDomain {
                name: "epsilon",
                domain: "(0, 1)",
                value: epsilon,
            });
        }
        Ok(Self { epsilon })
    }

    /// The exploration temperature.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl LearningRule for LogLinear {
    fn name(&self) -> &'static str {
        "loglinear"
    }

    fn update_vars(
        &self,
        vars: &StateVars,
        actions: &[ActionId],
        q: &QSlice,
        rng: &mut SimRng,
    ) -> StateVars {
        let updating = PlayerId::new(rng.gen_range_usize(0..NUM_PLAYERS) as u8);
        let fixed = vars.action.of(updating.other());

        // Weights epsilon^(-Q) over the updating player's row, the opponent's
        // action held fixed.
        let weights: Vec<f64> = actions
            .iter()
            .map(|&a| {
                let q_val = if updating.index() == 0 {
                    q.get(updating, a, fixed)
                } else {
                    q.get(updating, fixed, a)
                };
                self.epsilon.powf(-q_val)
            })
            .collect();

        // Weights are strictly positive unless the exponentiation
        // underflowed; repeat the current action in that case.
        let new_action = match rng.choose_weighted(&weights) {
            Some(index) => actions[index],
            None => vars.action.of(updating),
        };

        StateVars {
            action: vars.action.with(updating, new_action),
            hidden: vars.hidden,
        }
    }
}
