//! Batch summary statistics.

use serde::{Deserialize, Serialize};

use crate::day::{DayResult, DEFAULT_THRESHOLDS};

/// Per-threshold capacity figures across a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSummary {
    pub threshold_minutes: u32,
    /// Mean number of sessions of this length per day.
    pub mean_capacity: f64,
    /// Days that fit at least one session of this length.
    pub days_with_capacity: usize,
}

/// Headline numbers for a batch of days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub day_count: usize,
    pub mean_interruptions: f64,
    pub mean_focus_minutes: f64,
    pub min_focus_minutes: f64,
    pub max_focus_minutes: f64,
    pub mean_longest_block: f64,
    pub thresholds: Vec<ThresholdSummary>,
}

impl BatchSummary {
    /// Summarize `days`. An empty slice yields all-zero figures.
    pub fn from_days(days: &[DayResult]) -> Self {
        if days.is_empty() {
            return Self::default();
        }

        let n = days.len() as f64;
        let mean = |f: fn(&DayResult) -> f64| days.iter().map(f).sum::<f64>() / n;

        let thresholds = DEFAULT_THRESHOLDS
            .iter()
            .map(|&t| {
                let capacities = days.iter().map(|d| d.capacity(t as f64));
                ThresholdSummary {
                    threshold_minutes: t,
                    mean_capacity: capacities.clone().map(f64::from).sum::<f64>() / n,
                    days_with_capacity: capacities.filter(|&c| c > 0).count(),
                }
            })
            .collect();

        Self {
            day_count: days.len(),
            mean_interruptions: mean(|d| d.interruption_count as f64),
            mean_focus_minutes: mean(|d| d.total_focus_minutes),
            min_focus_minutes: days
                .iter()
                .map(|d| d.total_focus_minutes)
                .fold(f64::INFINITY, f64::min),
            max_focus_minutes: days
                .iter()
                .map(|d| d.total_focus_minutes)
                .fold(f64::NEG_INFINITY, f64::max),
            mean_longest_block: mean(|d| d.longest_block_duration),
            thresholds,
        }
    }

    /// Summary row for one of the default thresholds.
    pub fn threshold(&self, threshold_minutes: u32) -> Option<&ThresholdSummary> {
        self.thresholds
            .iter()
            .find(|t| t.threshold_minutes == threshold_minutes)
    }
}
