//! Back-of-the-envelope cost of an interruption rate.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::{validate_rate, validate_recovery};

/// Closed-form figures that need no simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub rate_per_hour: f64,
    pub recovery_minutes: f64,
    /// Mean minutes between interruptions; `None` when the rate is zero.
    pub average_gap_minutes: Option<f64>,
    /// Recovery minutes lost per hour, ignoring overlap between interruptions.
    pub recovery_loss_per_hour: f64,
}

impl ImpactEstimate {
    pub fn new(rate_per_hour: f64, recovery_minutes: f64) -> Result<Self> {
        validate_rate(rate_per_hour)?;
        validate_recovery(recovery_minutes)?;

        let average_gap_minutes = (rate_per_hour > 0.0).then(|| 60.0 / rate_per_hour);
        Ok(Self {
            rate_per_hour,
            recovery_minutes,
            average_gap_minutes,
            recovery_loss_per_hour: rate_per_hour * recovery_minutes,
        })
    }

    /// Share of each hour lost to recovery, capped at 1.
    pub fn loss_fraction(&self) -> f64 {
        (self.recovery_loss_per_hour / 60.0).min(1.0)
    }
}
