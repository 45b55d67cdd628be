//! Simulation parameters, input validation and share links.
//!
//! Invalid input is rejected, never clamped. Every public entry point that
//! takes raw numbers runs them through the validators here first.
//!
//! A share link carries the parameters as flat query keys:
//! `lambda`, `delta`, `len`, `target`, `seed` and `days`, plus an optional
//! `day` naming the day the sender was looking at. Missing keys fall back to
//! the defaults; a key that is present but unparseable is an error. A `day`
//! outside the batch is dropped rather than rejected.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::batch::{simulate_batch, success_rate};
use crate::day::DayResult;
use crate::error::{Result, ShareLinkError, ValidationError};
use crate::persona::{Persona, PERSONAS};

/// Highest accepted interruption rate. Keeps the Poisson sampler's work bounded.
pub const MAX_RATE_PER_HOUR: f64 = 60.0;

const KEY_RATE: &str = "lambda";
const KEY_RECOVERY: &str = "delta";
const KEY_THRESHOLD: &str = "len";
const KEY_TARGET: &str = "target";
const KEY_SEED: &str = "seed";
const KEY_DAYS: &str = "days";
const KEY_DAY: &str = "day";

/// Inputs for one reproducible batch plus the goal it is judged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub interruptions_per_hour: f64,
    pub recovery_minutes: f64,
    pub threshold_minutes: f64,
    pub target_block_count: u32,
    pub seed: i64,
    pub day_count: usize,
    /// Day of the batch to show first, carried through share links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_day: Option<usize>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            interruptions_per_hour: 1.0,
            recovery_minutes: 11.0,
            threshold_minutes: 60.0,
            target_block_count: 1,
            seed: 12345,
            day_count: 100,
            selected_day: None,
        }
    }
}

impl SimulationParameters {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_rate(self.interruptions_per_hour)?;
        validate_recovery(self.recovery_minutes)?;
        validate_threshold(self.threshold_minutes)?;
        validate_day_count(self.day_count)?;
        Ok(())
    }

    /// Apply a persona's rate and recovery.
    pub fn with_persona(mut self, persona: &Persona) -> Self {
        self.interruptions_per_hour = persona.interruptions_per_hour;
        self.recovery_minutes = persona.recovery_minutes;
        self
    }

    /// The preset these parameters correspond to, if any.
    pub fn persona(&self) -> Option<&'static Persona> {
        PERSONAS
            .iter()
            .find(|p| p.matches(self.interruptions_per_hour, self.recovery_minutes))
    }

    /// Simulate the batch these parameters describe.
    pub fn run(&self) -> Result<Vec<DayResult>> {
        self.validate()?;
        simulate_batch(
            self.day_count,
            self.interruptions_per_hour,
            self.recovery_minutes,
            self.seed,
        )
    }

    /// Fraction of `days` meeting this goal.
    pub fn success_rate(&self, days: &[DayResult]) -> Result<f64> {
        success_rate(days, self.threshold_minutes, self.target_block_count)
    }

    /// The selected day, if it lies inside the batch.
    pub fn day_in_range(&self) -> Option<usize> {
        self.selected_day.filter(|&day| day < self.day_count)
    }

    /// Encode as a query string (without the leading `?`).
    pub fn to_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query
            .append_pair(KEY_RATE, &format_rate(self.interruptions_per_hour))
            .append_pair(KEY_RECOVERY, &self.recovery_minutes.to_string())
            .append_pair(KEY_THRESHOLD, &self.threshold_minutes.to_string())
            .append_pair(KEY_TARGET, &self.target_block_count.to_string())
            .append_pair(KEY_SEED, &self.seed.to_string())
            .append_pair(KEY_DAYS, &self.day_count.to_string());
        if let Some(day) = self.day_in_range() {
            query.append_pair(KEY_DAY, &day.to_string());
        }
        query.finish()
    }

    /// Attach the parameters to `base`, replacing any existing query.
    pub fn to_link(&self, base: &str) -> Result<String> {
        let mut url = Url::parse(base).map_err(ShareLinkError::from)?;
        url.set_query(Some(&self.to_query()));
        Ok(url.into())
    }

    /// Parse a full link or a bare query string and validate the result.
    pub fn from_link(link: &str) -> Result<Self> {
        let link = link.trim();
        let query = if link.contains("://") {
            let url = Url::parse(link).map_err(ShareLinkError::from)?;
            url.query().unwrap_or_default().to_string()
        } else {
            link.trim_start_matches('?').to_string()
        };

        let mut params = Self::default();
        let mut day: Option<i64> = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                KEY_RATE => params.interruptions_per_hour = parse_field(&key, &value)?,
                KEY_RECOVERY => params.recovery_minutes = parse_field(&key, &value)?,
                KEY_THRESHOLD => params.threshold_minutes = parse_field(&key, &value)?,
                KEY_TARGET => params.target_block_count = parse_field(&key, &value)?,
                KEY_SEED => params.seed = parse_field(&key, &value)?,
                KEY_DAYS => params.day_count = parse_field(&key, &value)?,
                KEY_DAY => day = Some(parse_field(&key, &value)?),
                _ => {}
            }
        }
        params.selected_day = day.and_then(|d| usize::try_from(d).ok());
        params.selected_day = params.day_in_range();

        params.validate()?;
        Ok(params)
    }
}

/// One decimal place when that is exact, full precision otherwise.
fn format_rate(rate_per_hour: f64) -> String {
    let short = format!("{rate_per_hour:.1}");
    if short.parse::<f64>() == Ok(rate_per_hour) {
        short
    } else {
        rate_per_hour.to_string()
    }
}

fn parse_field<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ShareLinkError> {
    value.trim().parse().map_err(|_| ShareLinkError::BadNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

pub(crate) fn validate_rate(rate_per_hour: f64) -> Result<(), ValidationError> {
    if !rate_per_hour.is_finite() || rate_per_hour < 0.0 {
        return Err(ValidationError::invalid(
            "interruptions_per_hour",
            format!("must be a finite number >= 0, got {rate_per_hour}"),
        ));
    }
    if rate_per_hour > MAX_RATE_PER_HOUR {
        return Err(ValidationError::invalid(
            "interruptions_per_hour",
            format!("must be at most {MAX_RATE_PER_HOUR}, got {rate_per_hour}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_recovery(recovery_minutes: f64) -> Result<(), ValidationError> {
    if !recovery_minutes.is_finite() || recovery_minutes < 0.0 {
        return Err(ValidationError::invalid(
            "recovery_minutes",
            format!("must be a finite number >= 0, got {recovery_minutes}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold_minutes: f64) -> Result<(), ValidationError> {
    if !threshold_minutes.is_finite() || threshold_minutes <= 0.0 {
        return Err(ValidationError::invalid(
            "threshold_minutes",
            format!("must be a finite number > 0, got {threshold_minutes}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_day_count(day_count: usize) -> Result<(), ValidationError> {
    if day_count == 0 {
        return Err(ValidationError::invalid("day_count", "must be at least 1"));
    }
    Ok(())
}

pub(crate) fn validate_trials(trials: usize) -> Result<(), ValidationError> {
    if trials == 0 {
        return Err(ValidationError::invalid("trials", "must be at least 1"));
    }
    Ok(())
}
