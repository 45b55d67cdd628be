//! Aggregate statistics over simulated days.
//!
//! This module provides batch summaries, Monte Carlo capacity estimates and
//! parameter-sweep heatmaps, plus a closed-form impact estimate for a given
//! rate and recovery time.

mod capacity;
mod impact;
mod summary;

pub use capacity::{
    estimate_expected_capacity, estimate_expected_capacity_with, CapacityHeatmap, HeatmapCell,
    SweepAxes, DEFAULT_TRIALS_PER_CELL,
};

pub use impact::ImpactEstimate;

pub use summary::{BatchSummary, ThresholdSummary};
