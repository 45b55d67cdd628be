//! Display helpers shared by front ends.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wall-clock hour at which the simulated day starts.
pub const DAY_START_HOUR: u32 = 9;

/// Render minutes since day start as a clock label, e.g. `"10:35am"`.
pub fn clock_label(minutes: f64) -> String {
    let start = NaiveTime::from_hms_opt(DAY_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    let offset = Duration::minutes(minutes.max(0.0).floor() as i64);
    (start + offset).format("%-I:%M%P").to_string()
}

/// Coarse classification of a focus block by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockBand {
    /// Under 15 minutes
    Fragment,
    /// 15 to 30 minutes
    Short,
    /// 30 to 45 minutes
    Solid,
    /// 45 minutes or more
    Deep,
}

impl BlockBand {
    pub fn from_duration(minutes: f64) -> Self {
        if minutes < 15.0 {
            BlockBand::Fragment
        } else if minutes < 30.0 {
            BlockBand::Short
        } else if minutes < 45.0 {
            BlockBand::Solid
        } else {
            BlockBand::Deep
        }
    }

    /// Character for ASCII day strips.
    pub fn glyph(&self) -> char {
        match self {
            BlockBand::Fragment => '░',
            BlockBand::Short => '▒',
            BlockBand::Solid => '▓',
            BlockBand::Deep => '█',
        }
    }
}
