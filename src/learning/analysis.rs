//! Aggregate policy-evolution statistics across trajectories.

use serde::{Deserialize, Serialize};

use crate::core::JointAction;

use super::history::RunHistory;

/// Per-iteration empirical-frequency statistics for one joint action across
/// a set of runs.
///
/// All three series have one entry per iteration: the mean cumulative
/// frequency across runs and a lower/upper percentile band describing the
/// spread.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencySeries {
    pub mean: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl FrequencySeries {
    /// Number of iterations covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Whether the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Cumulative empirical frequency of `target` per iteration, aggregated
/// across runs.
///
/// The band spans the `lower_pct` to `upper_pct` percentiles (percentages in
/// 0..=100, linearly interpolated between closest ranks; 20/80 mirrors the
/// usual spread plot). Runs of unequal length are truncated to the shortest;
/// an empty run set yields empty series.
#[must_use]
pub fn action_frequencies(
    runs: &[RunHistory],
    target: JointAction,
    lower_pct: f64,
    upper_pct: f64,
) -> FrequencySeries {
    let iterations = runs.iter().map(RunHistory::len).min().unwrap_or(0);
    if iterations == 0 {
        return FrequencySeries::default();
    }

    let per_run: Vec<Vec<f64>> = runs.iter().map(|r| r.cumulative_frequency(target)).collect();

    let mut series = FrequencySeries {
        mean: Vec::with_capacity(iterations),
        lower: Vec::with_capacity(iterations),
        upper: Vec::with_capacity(iterations),
    };

    let mut column = Vec::with_capacity(per_run.len());
    for t in 0..iterations {
        column.clear();
        column.extend(per_run.iter().map(|freqs| freqs[t]));

        series
            .mean
            .push(column.iter().sum::<f64>() / column.len() as f64);

        column.sort_by(|a, b| a.total_cmp(b));
        series.lower.push(percentile(&column, lower_pct));
        series.upper.push(percentile(&column, upper_pct));
    }

    series
}

/// Linear-interpolated percentile of an ascending-sorted non-empty slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    let fraction = rank - low as f64;
    sorted[low] + (sorted[high] - sorted[low]) * fraction
}
