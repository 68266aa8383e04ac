//! Game definitions: the abstract two-stage game contract and the bundled
//! concrete games.
//!
//! A game is data: a shared ordered action set, per-stage per-state reward
//! tables, and a deterministic transition from the stage-1 joint action to a
//! stage-2 state. Games carry no mutable state beyond the tables built at
//! construction, so one instance can back any number of concurrent
//! trajectories.
//!
//! The learning engine never reads a [`Game`] directly. It compiles one into
//! a dense [`GameTable`] first; compilation is the single place the contract
//! is validated, so a malformed game fails before any simulation starts.

mod rewards;
mod staghunt;
mod table;
mod treasure;

pub mod registry;

pub use rewards::RewardTable;
pub use staghunt::StagHuntGame;
pub use table::GameTable;
pub use treasure::TreasureGame;

use crate::core::{ActionId, JointAction};

/// Number of sequential stages in every supported game.
pub const NUM_STAGES: usize = 2;

/// Conventional name of the unique initial state at stage 1.
pub const INITIAL_STATE: &str = "s1";

/// Two-player, two-stage game contract.
///
/// Stages are numbered 1-based. Stage 1 holds the single initial state;
/// stage-2 states are reached through [`Game::transition`]. The position of
/// a name in [`Game::state_names`] is its dense index, and the engine pins
/// convergence tracking to stage 1 index 0.
pub trait Game: Send + Sync + std::fmt::Debug {
    /// Identifier used by the registry and in diagnostics.
    fn name(&self) -> &str;

    /// Ordered action set shared by both players.
    ///
    /// The i-th entry must be `ActionId(i)`; identifiers double as dense
    /// table indices.
    fn actions(&self) -> &[ActionId];

    /// Ordered state names for a stage (1-based).
    fn state_names(&self, stage: usize) -> &[String];

    /// Reward table for a stage/state, if one is declared.
    fn reward_table(&self, stage: usize, state: &str) -> Option<&RewardTable>;

    /// Stage-2 state reached from a stage-1 joint action.
    ///
    /// Must be total over `actions x actions`; returning `None` anywhere
    /// makes compilation fail with a configuration error.
    fn transition(&self, joint: JointAction) -> Option<&str>;
}
