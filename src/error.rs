//! Configuration-time error taxonomy.
//!
//! Every failure mode in this crate is a deterministic consequence of an
//! invalid configuration, so all errors surface eagerly from constructors
//! and compilation, never mid-run. The learning loop itself is infallible.

use thiserror::Error;

use crate::core::JointAction;

/// Fatal configuration errors, raised before any simulation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A rule parameter lies outside its valid domain.
    #[error("parameter `{name}` must lie in {domain}, got {value}")]
    ParameterDomain {
        name: &'static str,
        domain: &'static str,
        value: f64,
    },

    /// No game is registered under this identifier.
    #[error("unknown game `{0}`")]
    UnknownGame(String),

    /// No learning rule is registered under this identifier.
    #[error("unknown learning rule `{0}`")]
    UnknownRule(String),

    /// A rule was given the wrong number of coefficients.
    #[error("rule `{rule}` expects {expected} coefficient(s), got {got}")]
    CoefficientCount {
        rule: &'static str,
        expected: usize,
        got: usize,
    },

    /// A game declares no actions.
    #[error("game declares an empty action set")]
    EmptyActionSet,

    /// An action identifier does not match its declared position.
    #[error("action at position {position} is numbered {found}, identifiers must be dense from 0")]
    ActionNumbering { position: usize, found: u8 },

    /// A stage declares no states.
    #[error("stage {stage} declares no states")]
    EmptyStage { stage: usize },

    /// A declared state has no reward table.
    #[error("missing reward table for stage {stage} state `{state}`")]
    MissingRewards { stage: usize, state: String },

    /// A reward table does not cover the declared action set.
    #[error(
        "reward table for stage {stage} state `{state}` covers {found} action(s), expected {expected}"
    )]
    RewardShape {
        stage: usize,
        state: String,
        found: usize,
        expected: usize,
    },

    /// The transition function is undefined for a joint action.
    #[error("transition is undefined for joint action {joint}")]
    PartialTransition { joint: JointAction },

    /// The transition function targets a state missing from the next stage.
    #[error("transition for {joint} targets `{state}`, which is not a stage-2 state")]
    UnknownTransitionTarget { joint: JointAction, state: String },
}
