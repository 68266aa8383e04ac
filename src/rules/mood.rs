//! Marden-style content/discontent mood learning.

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, PlayerId, PlayerPair, SimRng};
use crate::error::ConfigError;

use super::{Hidden, LearningRule, Mood, QSlice, StateVars};

/// Mood-based learning rule.
///
/// Each player carries a content/discontent mood. A discontent player draws
/// its next action uniformly from the whole action set; a content player
/// switches to a uniformly random different action with probability
/// `epsilon^c` and repeats its current action otherwise. Moods then update
/// independently per player: a content player whose round left the joint
/// action unchanged stays content deterministically; in every other case the
/// new mood is content with probability `epsilon^(1 - Q_i(new joint))`.
///
/// The content probability is only meaningful on a bounded Q scale, so this
/// rule requires reward normalization.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MardenMood {
    epsilon: f64,
    c: f64,
    reward_precision: u32,
}

impl MardenMood {
    /// Create a mood rule. `epsilon` must lie strictly in (0, 1); `c` must
    /// be finite and non-negative.
    pub fn new(epsilon: f64, c: f64) -> Result<Self, ConfigError> {
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(ConfigError::ParameterDomain {
                name: "epsilon",
                domain: "(0, 1)",
                value: epsilon,
            });
        }
        if !(c.is_finite() && c >= 0.0) {
            return Err(ConfigError::ParameterDomain {
                name: "c",
                domain: "[0, inf)",
                value: c,
            });
        }
        Ok(Self {
            epsilon,
            c,
            reward_precision: 2,
        })
    }

    /// Override the decimal precision rewards are rounded to after
    /// normalization.
    #[must_use]
    pub fn with_reward_precision(mut self, precision: u32) -> Self {
        self.reward_precision = precision;
        self
    }

    /// The exploration temperature.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The exploration exponent.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    fn is_content(hidden: Hidden) -> bool {
        matches!(hidden, Hidden::Mood(Mood::Content))
    }
}

impl LearningRule for MardenMood {
    fn name(&self) -> &'static str {
        "mardenmood"
    }

    fn normalizes_rewards(&self) -> bool {
        true
    }

    fn reward_precision(&self) -> u32 {
        self.reward_precision
    }

    fn initial_hidden(&self, rng: &mut SimRng) -> PlayerPair<Hidden> {
        PlayerPair::from_fn(|_| {
            if rng.gen_bool(0.5) {
                Hidden::Mood(Mood::Content)
            } else {
                Hidden::Mood(Mood::Discontent)
            }
        })
    }

    fn update_vars(
        &self,
        vars: &StateVars,
        actions: &[ActionId],
        q: &QSlice,
        rng: &mut SimRng,
    ) -> StateVars {
        // Action update.
        let mut new_action = vars.action;
        for player in PlayerId::both() {
            if let Hidden::Mood(Mood::Discontent) = vars.hidden[player] {
                // Discontent: full memoryless exploration.
                if let Some(&a) = rng.choose(actions) {
                    new_action = new_action.with(player, a);
                }
            } else if rng.gen_bool(self.epsilon.powf(self.c)) {
                // Content: rare switch to a different action. A single-action
                // set falls back to repeating the current one.
                let current = vars.action.of(player);
                let others: Vec<ActionId> =
                    actions.iter().copied().filter(|&a| a != current).collect();
                let a = rng.choose(&others).copied().unwrap_or(current);
                new_action = new_action.with(player, a);
            }
        }

        // Mood update.
        let hidden = PlayerPair::from_fn(|player| {
            if Self::is_content(vars.hidden[player]) && new_action == vars.action {
                Hidden::Mood(Mood::Content)
            } else {
                let q_new = q.get_joint(player, new_action);
                let content = rng.gen_bool(self.epsilon.powf(1.0 - q_new));
                Hidden::Mood(if content { Mood::Content } else { Mood::Discontent })
            }
        });

        StateVars {
            action: new_action,
            hidden,
        }
    }
}
