//! Monte Carlo capacity estimates and parameter sweeps.
//!
//! Unlike batches, these estimates are not meant to be replayed. Each trial
//! simulates one day under a freshly drawn seed, and the seeds themselves
//! come from an injected [`UniformSource`] so tests can pin them.

use serde::{Deserialize, Serialize};

use crate::day::simulate_day;
use crate::error::Result;
use crate::params::{validate_rate, validate_recovery, validate_threshold, validate_trials};
use crate::rng::{draw_seed, EntropySource, Mulberry32, UniformSource};

/// Trials per heatmap cell when none are configured.
pub const DEFAULT_TRIALS_PER_CELL: usize = 60;

/// Expected single-day capacity at `threshold_minutes`, estimated from
/// `trials` independently seeded days. Seeds come from OS entropy, so
/// repeated calls give slightly different answers.
///
/// # Errors
///
/// Returns a validation error for a negative rate or recovery time, a
/// non-positive threshold, or zero trials.
pub fn estimate_expected_capacity(
    rate_per_hour: f64,
    recovery_minutes: f64,
    threshold_minutes: f64,
    trials: usize,
) -> Result<f64> {
    let mut seeds = EntropySource::new();
    estimate_expected_capacity_with(
        &mut seeds,
        rate_per_hour,
        recovery_minutes,
        threshold_minutes,
        trials,
    )
}

/// Same as [`estimate_expected_capacity`], drawing trial seeds from `seeds`.
pub fn estimate_expected_capacity_with(
    seeds: &mut impl UniformSource,
    rate_per_hour: f64,
    recovery_minutes: f64,
    threshold_minutes: f64,
    trials: usize,
) -> Result<f64> {
    validate_rate(rate_per_hour)?;
    validate_recovery(recovery_minutes)?;
    validate_threshold(threshold_minutes)?;
    validate_trials(trials)?;

    let total: u64 = (0..trials)
        .map(|i| {
            let seed = draw_seed(&mut *seeds).0 + i as i64;
            let mut rng = Mulberry32::new(seed);
            simulate_day(0, rate_per_hour, recovery_minutes, &mut rng).capacity(threshold_minutes)
                as u64
        })
        .sum();

    Ok(total as f64 / trials as f64)
}

/// Rate and recovery values to sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxes {
    pub rates: Vec<f64>,
    pub recoveries: Vec<f64>,
}

impl Default for SweepAxes {
    /// Rates 0..=4 per hour in steps of 0.5, recovery 5..=30 minutes in steps of 5.
    fn default() -> Self {
        Self {
            rates: (0..=8).map(|i| i as f64 * 0.5).collect(),
            recoveries: (1..=6).map(|i| i as f64 * 5.0).collect(),
        }
    }
}

/// One cell of a capacity heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub rate_per_hour: f64,
    pub recovery_minutes: f64,
    pub expected_capacity: f64,
}

impl HeatmapCell {
    /// Cell value scaled to `[0, 1]` against the grid maximum.
    pub fn intensity(&self, max: f64) -> f64 {
        if max <= 0.0 {
            0.0
        } else {
            (self.expected_capacity / max).clamp(0.0, 1.0)
        }
    }
}

/// Expected capacity over a rate × recovery grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityHeatmap {
    pub threshold_minutes: f64,
    pub trials_per_cell: usize,
    /// One row per recovery value, one column per rate, in axis order.
    pub rows: Vec<Vec<HeatmapCell>>,
    pub max_expected_capacity: f64,
}

impl CapacityHeatmap {
    /// Sweep `axes` with entropy-seeded trials.
    pub fn sweep(axes: &SweepAxes, threshold_minutes: f64, trials_per_cell: usize) -> Result<Self> {
        let mut seeds = EntropySource::new();
        Self::sweep_with(&mut seeds, axes, threshold_minutes, trials_per_cell)
    }

    /// Sweep `axes`, drawing trial seeds from `seeds`.
    pub fn sweep_with(
        seeds: &mut impl UniformSource,
        axes: &SweepAxes,
        threshold_minutes: f64,
        trials_per_cell: usize,
    ) -> Result<Self> {
        tracing::debug!(
            rates = axes.rates.len(),
            recoveries = axes.recoveries.len(),
            threshold_minutes,
            trials_per_cell,
            "sweeping capacity heatmap"
        );

        let mut rows = Vec::with_capacity(axes.recoveries.len());
        let mut max_expected_capacity = 0.0_f64;

        for &recovery_minutes in &axes.recoveries {
            let mut row = Vec::with_capacity(axes.rates.len());
            for &rate_per_hour in &axes.rates {
                let expected_capacity = estimate_expected_capacity_with(
                    &mut *seeds,
                    rate_per_hour,
                    recovery_minutes,
                    threshold_minutes,
                    trials_per_cell,
                )?;
                max_expected_capacity = max_expected_capacity.max(expected_capacity);
                row.push(HeatmapCell {
                    rate_per_hour,
                    recovery_minutes,
                    expected_capacity,
                });
            }
            tracing::trace!(recovery_minutes, "heatmap row done");
            rows.push(row);
        }

        Ok(Self {
            threshold_minutes,
            trials_per_cell,
            rows,
            max_expected_capacity,
        })
    }

    /// Iterate over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &HeatmapCell> {
        self.rows.iter().flatten()
    }
}
