//! Learning rules: pluggable actor strategies.
//!
//! A rule proposes, for one state at one stage, the next joint action and
//! the next per-player hidden variables, given the state's current variables
//! and that stage/state's Q-value slice. Rules are stateless beyond their
//! tuned parameters; all randomness comes from the generator threaded into
//! the call, so trajectories sharing one rule instance stay independent.
//!
//! Parameter validation happens at rule construction, never inside
//! `update_vars`.

mod loglinear;
mod mood;

pub mod registry;

pub use loglinear::LogLinear;
pub use mood::MardenMood;

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, JointAction, PlayerId, PlayerPair, SimRng};

/// Content/discontent mood of one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Content,
    Discontent,
}

/// Per-player auxiliary memory carried between iterations.
///
/// Opaque to the engine: it stores and hands back whatever the rule
/// produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hidden {
    /// Placeholder for rules without memory.
    Neutral,
    /// Mood of a content/discontent automaton.
    Mood(Mood),
}

/// The per-state variables a rule reads and rewrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVars {
    /// Joint action currently associated with the state.
    pub action: JointAction,
    /// Per-player hidden variables.
    pub hidden: PlayerPair<Hidden>,
}

/// Per-player Q-values for a single stage/state.
///
/// This is the only view of the value tensors a rule receives. Shape:
/// players x actions x actions, row-major per player.
#[derive(Clone, Debug)]
pub struct QSlice {
    num_actions: usize,
    values: PlayerPair<Vec<f64>>,
}

impl QSlice {
    /// Build a slice from per-player row-major `[a1][a2]` values.
    #[must_use]
    pub fn new(num_actions: usize, values: PlayerPair<Vec<f64>>) -> Self {
        debug_assert!(values.iter().all(|v| v.len() == num_actions * num_actions));
        Self { num_actions, values }
    }

    /// Number of actions per player.
    #[must_use]
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// One player's Q-value at a joint action given by its components.
    #[must_use]
    pub fn get(&self, player: PlayerId, a1: ActionId, a2: ActionId) -> f64 {
        self.values[player][a1.index() * self.num_actions + a2.index()]
    }

    /// One player's Q-value at a joint action.
    #[must_use]
    pub fn get_joint(&self, player: PlayerId, joint: JointAction) -> f64 {
        let (a1, a2) = joint.pair();
        self.get(player, a1, a2)
    }
}

/// Learning-rule contract.
///
/// `update_vars` must be a pure function of its inputs plus the passed
/// generator: it never mutates its arguments and holds no memory of earlier
/// calls. Invalid parameters are rejected when the rule is constructed, so
/// an update call cannot fail.
pub trait LearningRule: Send + Sync + std::fmt::Debug {
    /// Identifier used by the registry and in diagnostics.
    fn name(&self) -> &'static str;

    /// Propose the next joint action and hidden pair for one state.
    fn update_vars(
        &self,
        vars: &StateVars,
        actions: &[ActionId],
        q: &QSlice,
        rng: &mut SimRng,
    ) -> StateVars;

    /// Whether the engine must scale rewards into a bounded range before
    /// seeding Q-values.
    fn normalizes_rewards(&self) -> bool {
        false
    }

    /// Decimal places rewards are rounded to when normalizing.
    fn reward_precision(&self) -> u32 {
        2
    }

    /// Initial hidden pair for a freshly initialized state.
    fn initial_hidden(&self, rng: &mut SimRng) -> PlayerPair<Hidden> {
        let _ = rng;
        PlayerPair::with_value(Hidden::Neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q_slice_lookup() {
        let slice = QSlice::new(
            2,
            PlayerPair::new(vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]),
        );

        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let a0 = ActionId::new(0);
        let a1 = ActionId::new(1);

        assert_eq!(slice.get(p0, a0, a0), 1.0);
        assert_eq!(slice.get(p0, a1, a0), 3.0);
        assert_eq!(slice.get(p1, a0, a1), 6.0);
        assert_eq!(slice.get_joint(p1, JointAction::new(a1, a1)), 8.0);
    }
}
