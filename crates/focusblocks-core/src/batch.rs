//! Reproducible multi-day batches and goal success rates.
//!
//! A batch draws every day from one shared [`Mulberry32`] stream, in day
//! order. Day `n` therefore depends on how many draws days `0..n` consumed:
//! skipping, reordering or reseeding individual days changes every later
//! day. Shared links rely on this exact ordering.

use crate::day::{simulate_day, DayResult};
use crate::error::Result;
use crate::params::{validate_day_count, validate_rate, validate_recovery, validate_threshold};
use crate::rng::Mulberry32;

/// Simulate `day_count` consecutive days from a single seeded stream.
///
/// # Errors
///
/// Returns a validation error if `day_count` is zero or the rate or recovery
/// time is negative or not finite.
pub fn simulate_batch(
    day_count: usize,
    rate_per_hour: f64,
    recovery_minutes: f64,
    seed: i64,
) -> Result<Vec<DayResult>> {
    validate_day_count(day_count)?;
    validate_rate(rate_per_hour)?;
    validate_recovery(recovery_minutes)?;

    tracing::debug!(day_count, rate_per_hour, recovery_minutes, seed, "simulating batch");

    let mut rng = Mulberry32::new(seed);
    let days: Vec<DayResult> = (0..day_count)
        .map(|i| simulate_day(i, rate_per_hour, recovery_minutes, &mut rng))
        .collect();

    tracing::trace!(
        interruptions = days.iter().map(|d| d.interruption_count as u64).sum::<u64>(),
        "batch complete"
    );
    Ok(days)
}

/// Fraction of days, in `[0, 1]`, whose capacity at `threshold_minutes`
/// reaches `target_block_count`. An empty slice yields 0.
///
/// # Errors
///
/// Returns a validation error if the threshold is not a positive number.
pub fn success_rate(
    days: &[DayResult],
    threshold_minutes: f64,
    target_block_count: u32,
) -> Result<f64> {
    validate_threshold(threshold_minutes)?;
    if days.is_empty() {
        return Ok(0.0);
    }
    let good = days
        .iter()
        .filter(|d| d.meets_goal(threshold_minutes, target_block_count))
        .count();
    Ok(good as f64 / days.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DAY_LENGTH_MINUTES;
    use crate::error::CoreError;

    #[test]
    fn test_deterministic_across_calls() {
        let a = simulate_batch(100, 1.0, 11.0, 12345).unwrap();
        let b = simulate_batch(100, 1.0, 11.0, 12345).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_batch_reference_values() {
        let days = simulate_batch(100, 1.0, 11.0, 12345).unwrap();
        assert_eq!(days.len(), 100);

        let counts: Vec<u32> = days.iter().take(5).map(|d| d.interruption_count).collect();
        assert_eq!(counts, vec![14, 6, 8, 5, 1]);

        let total: u32 = days.iter().map(|d| d.interruption_count).sum();
        assert_eq!(total, 791);

        let second = &days[1];
        assert_eq!(second.day_index, 1);
        assert_eq!(second.blocks.len(), 6);
        assert!((second.total_focus_minutes - 414.7699298709631).abs() < 1e-9);
        assert!((second.longest_block_duration - 252.46641264855862).abs() < 1e-9);
        assert_eq!(second.block_capacity_by_threshold[&30], 11);
        assert_eq!(second.block_capacity_by_threshold[&45], 6);
        assert_eq!(second.block_capacity_by_threshold[&60], 5);
    }

    #[test]
    fn test_first_day_matches_single_day_batch() {
        let many = simulate_batch(10, 1.0, 11.0, 12345).unwrap();
        let one = simulate_batch(1, 1.0, 11.0, 12345).unwrap();
        assert_eq!(many[0], one[0]);
    }

    #[test]
    fn test_days_share_one_stream() {
        let days = simulate_batch(2, 1.0, 11.0, 12345).unwrap();
        let mut fresh = Mulberry32::new(12345);
        let reseeded = simulate_day(1, 1.0, 11.0, &mut fresh);
        assert_ne!(days[1].interruption_timestamps, reseeded.interruption_timestamps);
    }

    #[test]
    fn test_zero_rate_batch() {
        let days = simulate_batch(20, 0.0, 11.0, 1).unwrap();
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.day_index, i);
            assert_eq!(day.interruption_count, 0);
            assert_eq!(day.blocks.len(), 1);
            assert_eq!(day.blocks[0].start, 0.0);
            assert_eq!(day.blocks[0].end, DAY_LENGTH_MINUTES);
            assert_eq!(day.total_focus_minutes, DAY_LENGTH_MINUTES);
        }
    }

    #[test]
    fn test_zero_recovery_keeps_full_day() {
        let days = simulate_batch(20, 3.0, 0.0, 9).unwrap();
        for day in &days {
            assert!((day.total_focus_minutes - DAY_LENGTH_MINUTES).abs() < 1e-9);
            for (block, t) in day.blocks.iter().skip(1).zip(&day.interruption_timestamps) {
                assert_eq!(block.start, *t);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        assert!(matches!(simulate_batch(0, 1.0, 11.0, 1), Err(CoreError::Validation(_))));
        assert!(matches!(simulate_batch(1, -1.0, 11.0, 1), Err(CoreError::Validation(_))));
        assert!(matches!(simulate_batch(1, 1.0, -11.0, 1), Err(CoreError::Validation(_))));
        assert!(simulate_batch(1, 1.0, 11.0, i64::MIN).is_ok());
    }

    #[test]
    fn test_success_rate_reference_values() {
        let days = simulate_batch(100, 1.0, 11.0, 12345).unwrap();
        assert_eq!(success_rate(&days, 45.0, 3).unwrap(), 1.0);
        assert_eq!(success_rate(&days, 60.0, 1).unwrap(), 1.0);
        assert_eq!(success_rate(&days, 60.0, 2).unwrap(), 0.92);
        assert_eq!(success_rate(&days, 60.0, 3).unwrap(), 0.79);
    }

    #[test]
    fn test_success_rate_bounds() {
        let days = simulate_batch(10, 2.0, 15.0, 3).unwrap();
        assert_eq!(success_rate(&days, 30.0, 0).unwrap(), 1.0);
        assert_eq!(success_rate(&days, 30.0, 1000).unwrap(), 0.0);
        assert_eq!(success_rate(&[], 30.0, 1).unwrap(), 0.0);
        assert!(success_rate(&days, 0.0, 1).is_err());
    }
}
