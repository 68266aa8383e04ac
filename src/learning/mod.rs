//! The learning engine and its surrounding machinery.
//!
//! - [`UnifiedLearner`] runs one trajectory: actor/critic sweeps over the
//!   stages, last to first, for a fixed number of iterations.
//! - [`LearningOutcome`] is the read surface a finished trajectory exposes.
//! - [`TrajectoryRunner`] repeats trajectories with derived seeds.
//! - [`analysis`] aggregates action-frequency statistics across runs.

pub mod analysis;
pub mod engine;
pub mod history;
pub mod runner;
pub mod values;

pub use analysis::{action_frequencies, FrequencySeries};
pub use engine::{LearningOutcome, UnifiedLearner, INITIAL_STATE_INDEX};
pub use history::RunHistory;
pub use runner::TrajectoryRunner;
pub use values::{QTensor, VTensor};
