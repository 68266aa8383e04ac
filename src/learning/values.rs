//! Dense value tensors.
//!
//! Q and V are stored as contiguous arrays indexed by small integers
//! (player, 1-based stage, dense state index, actions). The state space per
//! stage is small and fixed, so this arena-style layout beats any keyed
//! structure for the hot loop. The stage axis carries boundary rows past the
//! horizon so one-stage-ahead lookups never reallocate; boundary rows stay
//! zero.

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, JointAction, PlayerId, NUM_PLAYERS};
use crate::games::NUM_STAGES;

/// Per-player action-value estimates: `[player][stage][state][a1][a2]`.
///
/// The stage axis is 1-based with one leading unused row, mirroring the
/// game's stage numbering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QTensor {
    num_states: usize,
    num_actions: usize,
    data: Vec<f64>,
}

impl QTensor {
    /// Allocate an all-zero tensor.
    #[must_use]
    pub fn zeros(num_states: usize, num_actions: usize) -> Self {
        let len = NUM_PLAYERS * (NUM_STAGES + 1) * num_states * num_actions * num_actions;
        Self {
            num_states,
            num_actions,
            data: vec![0.0; len],
        }
    }

    fn offset(&self, player: PlayerId, stage: usize, state: usize, a1: ActionId, a2: ActionId) -> usize {
        debug_assert!(stage <= NUM_STAGES);
        debug_assert!(state < self.num_states);
        (((player.index() * (NUM_STAGES + 1) + stage) * self.num_states + state)
            * self.num_actions
            + a1.index())
            * self.num_actions
            + a2.index()
    }

    /// Read one entry.
    #[must_use]
    pub fn get(&self, player: PlayerId, stage: usize, state: usize, a1: ActionId, a2: ActionId) -> f64 {
        self.data[self.offset(player, stage, state, a1, a2)]
    }

    /// Read one entry by joint action.
    #[must_use]
    pub fn get_joint(&self, player: PlayerId, stage: usize, state: usize, joint: JointAction) -> f64 {
        let (a1, a2) = joint.pair();
        self.get(player, stage, state, a1, a2)
    }

    /// Write one entry.
    pub fn set(
        &mut self,
        player: PlayerId,
        stage: usize,
        state: usize,
        a1: ActionId,
        a2: ActionId,
        value: f64,
    ) {
        let offset = self.offset(player, stage, state, a1, a2);
        self.data[offset] = value;
    }

    /// Whether every entry is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

/// Per-player state-value estimates: `[player][stage][state]`.
///
/// Carries one extra stage row past the horizon as the terminal boundary; it
/// is allocated zero and never written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VTensor {
    num_states: usize,
    data: Vec<f64>,
}

impl VTensor {
    /// Allocate an all-zero tensor.
    #[must_use]
    pub fn zeros(num_states: usize) -> Self {
        let len = NUM_PLAYERS * (NUM_STAGES + 2) * num_states;
        Self {
            num_states,
            data: vec![0.0; len],
        }
    }

    fn offset(&self, player: PlayerId, stage: usize, state: usize) -> usize {
        debug_assert!(stage <= NUM_STAGES + 1);
        debug_assert!(state < self.num_states);
        (player.index() * (NUM_STAGES + 2) + stage) * self.num_states + state
    }

    /// Read one entry.
    #[must_use]
    pub fn get(&self, player: PlayerId, stage: usize, state: usize) -> f64 {
        self.data[self.offset(player, stage, state)]
    }

    /// Write one entry.
    pub fn set(&mut self, player: PlayerId, stage: usize, state: usize, value: f64) {
        let offset = self.offset(player, stage, state);
        self.data[offset] = value;
    }

    /// Whether every entry is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
