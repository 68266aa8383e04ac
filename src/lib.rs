//! # equilearn
//!
//! An equilibrium-selection learning engine for finite two-player, two-stage
//! games.
//!
//! Agents repeatedly choose actions, observe per-stage rewards, and update
//! value estimates and behavior under a pluggable learning rule, converging
//! toward an equilibrium policy.
//!
//! ## Design Principles
//!
//! 1. **Games are data**: a [`games::Game`] declares actions, reward tables,
//!    and a stage transition; the engine compiles it into a dense
//!    [`games::GameTable`] and validates the contract there, before any
//!    simulation runs.
//!
//! 2. **Rules are strategies**: a [`rules::LearningRule`] maps one state's
//!    current variables and Q-slice to proposed new variables. The engine is
//!    oblivious to how; rules are oblivious to tensors and stages.
//!
//! 3. **Owned randomness**: every learner holds its own seeded
//!    [`core::SimRng`], so trajectories are reproducible and safe to run
//!    concurrently against one shared game and rule.
//!
//! ## Modules
//!
//! - `core`: player/action identifiers, per-player pairs, RNG
//! - `games`: the game contract, compiled tables, bundled games, registry
//! - `rules`: the learning-rule contract, log-linear and mood rules, registry
//! - `learning`: value tensors, the engine, histories, batch runner, analysis
//! - `error`: configuration-time error taxonomy
//!
//! ## Example
//!
//! ```
//! use equilearn::games::TreasureGame;
//! use equilearn::learning::UnifiedLearner;
//! use equilearn::rules::LogLinear;
//!
//! let game = TreasureGame::new();
//! let rule = LogLinear::new(0.01).unwrap();
//!
//! let learner = UnifiedLearner::new(&game, &rule, 100, 42).unwrap();
//! let outcome = learner.run();
//!
//! assert_eq!(outcome.action_history().len(), 100);
//! ```

pub mod core;
pub mod error;
pub mod games;
pub mod learning;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{ActionId, JointAction, PlayerId, PlayerPair, SimRng, NUM_PLAYERS};

pub use crate::error::ConfigError;

pub use crate::games::{
    Game, GameTable, RewardTable, StagHuntGame, TreasureGame, INITIAL_STATE, NUM_STAGES,
};

pub use crate::rules::{Hidden, LearningRule, LogLinear, MardenMood, Mood, QSlice, StateVars};

pub use crate::learning::{
    action_frequencies, FrequencySeries, LearningOutcome, QTensor, RunHistory, TrajectoryRunner,
    UnifiedLearner, VTensor, INITIAL_STATE_INDEX,
};
