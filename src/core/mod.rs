//! Core types: players, actions, RNG.
//!
//! This module contains the fundamental building blocks shared by games,
//! learning rules, and the learning engine.

pub mod action;
pub mod player;
pub mod rng;

pub use action::{ActionId, JointAction};
pub use player::{PlayerId, PlayerPair, NUM_PLAYERS};
pub use rng::SimRng;
