//! Per-state reward tables.

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, PlayerId, PlayerPair};

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Square reward table for one state, indexed by joint action.
///
/// Cell `[a1][a2]` holds one reward per player for player 1 choosing `a1`
/// and player 2 choosing `a2`.
///
/// ## Example
///
/// ```
/// use equilearn::core::{ActionId, PlayerId};
/// use equilearn::games::RewardTable;
///
/// let table = RewardTable::from_rows(&[
///     &[(1.0, 1.0), (0.0, 0.0)],
///     &[(0.0, 0.0), (-2.0, 2.0)],
/// ]);
///
/// let cell = table.get(ActionId::new(1), ActionId::new(1));
/// assert_eq!(cell[PlayerId::new(0)], -2.0);
/// assert_eq!(cell[PlayerId::new(1)], 2.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardTable {
    num_actions: usize,
    /// Row-major cells: `cells[a1 * num_actions + a2]`.
    cells: Vec<PlayerPair<f64>>,
}

impl RewardTable {
    /// Build a table from row-major `(player 0, player 1)` reward pairs.
    ///
    /// Panics if the rows do not form a non-empty square.
    #[must_use]
    pub fn from_rows(rows: &[&[(f64, f64)]]) -> Self {
        let num_actions = rows.len();
        assert!(num_actions > 0, "reward table cannot be empty");

        let mut cells = Vec::with_capacity(num_actions * num_actions);
        for row in rows {
            assert!(row.len() == num_actions, "reward table must be square");
            for &(first, second) in *row {
                cells.push(PlayerPair::new(first, second));
            }
        }

        Self { num_actions, cells }
    }

    /// Number of actions the table covers per player.
    #[must_use]
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Per-player rewards for a joint action.
    #[must_use]
    pub fn get(&self, a1: ActionId, a2: ActionId) -> PlayerPair<f64> {
        self.cells[a1.index() * self.num_actions + a2.index()]
    }

    /// One player's reward for a joint action.
    #[must_use]
    pub fn reward(&self, player: PlayerId, a1: ActionId, a2: ActionId) -> f64 {
        self.get(a1, a2)[player]
    }

    /// Largest absolute reward magnitude in the table.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.cells
            .iter()
            .flat_map(|cell| cell.iter())
            .fold(0.0, |max, &r| max.max(r.abs()))
    }

    /// A copy with every reward divided by `divisor` and rounded to
    /// `precision` decimal places.
    #[must_use]
    pub fn scaled(&self, divisor: f64, precision: u32) -> RewardTable {
        Self {
            num_actions: self.num_actions,
            cells: self
                .cells
                .iter()
                .map(|cell| cell.map(|&r| round_to(r / divisor, precision)))
                .collect(),
        }
    }
}
