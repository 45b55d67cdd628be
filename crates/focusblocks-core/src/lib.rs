//! # Focus Blocks Core Library
//!
//! Monte Carlo simulation of workday interruptions, answering "how many usable
//! focus blocks will I get today?". Interruptions arrive as a Poisson process
//! over a fixed 8-hour day; after each one, focus cannot resume until a
//! recovery period has passed.
//!
//! ## Architecture
//!
//! - **Random sources**: a bit-exact seeded generator for reproducible runs and
//!   an entropy-backed one for exploratory estimates, behind one trait
//! - **Day simulator**: interruption draws, focus blocks and per-day capacity
//! - **Batches**: many days from one shared stream, plus goal success rates
//! - **Statistics**: batch summaries, expected capacity and heatmap sweeps
//! - **Parameters**: validation and share-link encoding
//!
//! Everything here is synchronous and pure apart from the entropy source and
//! the config file. Front ends call in with explicit parameters and render
//! what comes back.
//!
//! ## Key Components
//!
//! - [`simulate_batch`]: reproducible multi-day simulation
//! - [`estimate_expected_capacity`]: Monte Carlo expectation for sweeps
//! - [`SimulationParameters`]: validated inputs and share links
//! - [`Config`]: user defaults persisted as TOML

pub mod batch;
pub mod day;
pub mod error;
pub mod format;
pub mod params;
pub mod persona;
pub mod poisson;
pub mod rng;
pub mod stats;
pub mod storage;

pub use batch::{simulate_batch, success_rate};
pub use day::{simulate_day, DayResult, FocusBlock, Gap, DAY_LENGTH_MINUTES, DEFAULT_THRESHOLDS};
pub use error::{ConfigError, CoreError, ShareLinkError, ValidationError};
pub use format::{clock_label, BlockBand};
pub use params::{SimulationParameters, MAX_RATE_PER_HOUR};
pub use persona::{Persona, PERSONAS};
pub use poisson::sample_poisson;
pub use rng::{EntropySource, Mulberry32, SimulationSeed, UniformSource};
pub use stats::{
    estimate_expected_capacity, estimate_expected_capacity_with, BatchSummary, CapacityHeatmap,
    HeatmapCell, ImpactEstimate, SweepAxes,
};
pub use storage::Config;
