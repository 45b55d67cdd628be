//! Single-day interruption simulation.
//!
//! A day is a fixed 480-minute window. Interruptions arrive as a Poisson
//! process; each one ends the current focus block and blacks out the
//! following `recovery_minutes`. An interruption that lands inside an
//! existing blackout extends it from its own timestamp, so bursts of
//! interruptions chain into one long gap.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::poisson::sample_poisson;
use crate::rng::UniformSource;

/// Length of the simulated working day in minutes.
pub const DAY_LENGTH_MINUTES: f64 = 480.0;

/// Hours used to scale an hourly rate into a per-day mean.
pub const WORKDAY_HOURS: f64 = 8.0;

/// Block lengths, in minutes, for which every day precomputes capacity.
pub const DEFAULT_THRESHOLDS: [u32; 3] = [30, 45, 60];

/// A maximal uninterrupted, recovered interval of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusBlock {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

impl FocusBlock {
    fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            duration: end - start,
        }
    }

    /// Number of whole `threshold`-minute sessions that fit in this block.
    pub fn capacity(&self, threshold_minutes: f64) -> u32 {
        if threshold_minutes <= 0.0 || !threshold_minutes.is_finite() {
            return 0;
        }
        (self.duration / threshold_minutes).floor() as u32
    }
}

/// Time between focus blocks, spent interrupted or recovering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub start: f64,
    pub end: f64,
}

/// Outcome of one simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayResult {
    pub day_index: usize,
    pub interruption_count: u32,
    /// Ascending, each in `[0, DAY_LENGTH_MINUTES)`.
    pub interruption_timestamps: Vec<f64>,
    /// Non-overlapping, ordered by start.
    pub blocks: Vec<FocusBlock>,
    pub longest_block_duration: f64,
    pub total_focus_minutes: f64,
    /// Capacity for each of [`DEFAULT_THRESHOLDS`].
    pub block_capacity_by_threshold: BTreeMap<u32, u32>,
}

impl DayResult {
    /// Sum of whole `threshold`-minute sessions over all blocks.
    ///
    /// Works for any threshold, not only the precomputed defaults.
    pub fn capacity(&self, threshold_minutes: f64) -> u32 {
        self.blocks.iter().map(|b| b.capacity(threshold_minutes)).sum()
    }

    /// Whether this day fits at least `target` sessions of `threshold` minutes.
    pub fn meets_goal(&self, threshold_minutes: f64, target: u32) -> bool {
        self.capacity(threshold_minutes) >= target
    }

    /// Complement of the focus blocks within the day.
    pub fn gaps(&self) -> Vec<Gap> {
        let mut gaps = Vec::new();
        let mut cursor = 0.0;
        for block in &self.blocks {
            if block.start > cursor {
                gaps.push(Gap {
                    start: cursor,
                    end: block.start,
                });
            }
            cursor = block.end;
        }
        if cursor < DAY_LENGTH_MINUTES {
            gaps.push(Gap {
                start: cursor,
                end: DAY_LENGTH_MINUTES,
            });
        }
        gaps
    }
}

/// Simulate one day, consuming draws from `rng`.
///
/// Arguments are assumed valid; public entry points validate before calling.
pub fn simulate_day(
    day_index: usize,
    rate_per_hour: f64,
    recovery_minutes: f64,
    rng: &mut impl UniformSource,
) -> DayResult {
    let expected_per_day = rate_per_hour * WORKDAY_HOURS;
    let interruption_count = sample_poisson(expected_per_day, rng);

    let mut interruption_timestamps: Vec<f64> = (0..interruption_count)
        .map(|_| rng.next_f64() * DAY_LENGTH_MINUTES)
        .collect();
    interruption_timestamps.sort_by(f64::total_cmp);

    let blocks = build_blocks(&interruption_timestamps, recovery_minutes);

    let longest_block_duration = blocks.iter().map(|b| b.duration).fold(0.0, f64::max);
    let total_focus_minutes = blocks.iter().map(|b| b.duration).sum();

    let block_capacity_by_threshold: BTreeMap<u32, u32> = DEFAULT_THRESHOLDS
        .iter()
        .map(|&t| (t, blocks.iter().map(|b| b.capacity(t as f64)).sum::<u32>()))
        .collect();

    DayResult {
        day_index,
        interruption_count,
        interruption_timestamps,
        blocks,
        longest_block_duration,
        total_focus_minutes,
        block_capacity_by_threshold,
    }
}

/// Walk sorted interruptions plus an end-of-day sentinel and cut focus blocks.
fn build_blocks(timestamps: &[f64], recovery_minutes: f64) -> Vec<FocusBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0.0_f64;

    for &t in timestamps.iter().chain(std::iter::once(&DAY_LENGTH_MINUTES)) {
        if t > cursor {
            blocks.push(FocusBlock::new(cursor, t));
        }
        cursor = (t + recovery_minutes).min(DAY_LENGTH_MINUTES);
        if cursor >= DAY_LENGTH_MINUTES {
            break;
        }
    }

    blocks
}
