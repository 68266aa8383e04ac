//! Per-trajectory learning history.

use serde::{Deserialize, Serialize};

use crate::core::JointAction;

/// Append-only record of one trajectory's convergence behavior at the
/// initial state.
///
/// `values[t]` is the initial state's player-0 value as it stood *before*
/// iteration t's updates; `actions[t]` is the initial state's joint action
/// *after* them. Both sequences have length T once a run completes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    values: Vec<f64>,
    actions: Vec<JointAction>,
}

impl RunHistory {
    /// Create an empty history with room for `iterations` entries.
    #[must_use]
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            values: Vec::with_capacity(iterations),
            actions: Vec::with_capacity(iterations),
        }
    }

    /// Append one value sample.
    pub fn record_value(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Append one joint-action sample.
    pub fn record_action(&mut self, action: JointAction) {
        self.actions.push(action);
    }

    /// Number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The recorded value samples.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The recorded joint-action samples.
    #[must_use]
    pub fn actions(&self) -> &[JointAction] {
        &self.actions
    }

    /// Empirical frequency of `target` across the whole run.
    #[must_use]
    pub fn action_frequency(&self, target: JointAction) -> f64 {
        self.tail_action_frequency(self.actions.len(), target)
    }

    /// Empirical frequency of `target` over the last `n` recorded actions.
    ///
    /// Returns 0.0 for an empty history; `n` larger than the history covers
    /// the whole run.
    #[must_use]
    pub fn tail_action_frequency(&self, n: usize, target: JointAction) -> f64 {
        let tail_len = n.min(self.actions.len());
        if tail_len == 0 {
            return 0.0;
        }
        let start = self.actions.len() - tail_len;
        let count = self.actions[start..].iter().filter(|&&a| a == target).count();
        count as f64 / tail_len as f64
    }

    /// Cumulative empirical frequency series of `target`.
    ///
    /// Entry t is the share of `target` among `actions[0..=t]`.
    #[must_use]
    pub fn cumulative_frequency(&self, target: JointAction) -> Vec<f64> {
        let mut count = 0usize;
        self.actions
            .iter()
            .enumerate()
            .map(|(t, &a)| {
                if a == target {
                    count += 1;
                }
                count as f64 / (t + 1) as f64
            })
            .collect()
    }

    /// Compact binary snapshot of this history.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore a history from [`RunHistory::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
