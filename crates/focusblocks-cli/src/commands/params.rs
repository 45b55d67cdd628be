//! Simulation flags shared by several commands.

use clap::Args;
use focusblocks_core::rng::draw_seed;
use focusblocks_core::{Config, EntropySource, Persona, SimulationParameters};

#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Start from a share link or query string instead of the config
    #[arg(long)]
    pub link: Option<String>,
    /// Start from a preset (deep_work, maker, manager, executive, on_call)
    #[arg(long)]
    pub persona: Option<String>,
    /// Interruptions per hour
    #[arg(long)]
    pub rate: Option<f64>,
    /// Recovery minutes after each interruption
    #[arg(long)]
    pub recovery: Option<f64>,
    /// Seed for the simulation stream
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,
    /// Draw a fresh seed instead of using a fixed one
    #[arg(long, conflicts_with = "seed")]
    pub random_seed: bool,
    /// Number of days to simulate
    #[arg(long)]
    pub days: Option<usize>,
    /// Focus session length in minutes
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Sessions needed for a successful day
    #[arg(long)]
    pub target: Option<u32>,
}

impl ParamArgs {
    /// Layer config defaults (or a share link), then the persona, then
    /// explicit flags.
    pub fn resolve(&self, config: &Config) -> Result<SimulationParameters, Box<dyn std::error::Error>> {
        let mut params = match self.link {
            Some(ref link) => SimulationParameters::from_link(link)?,
            None => config.parameters(),
        };

        if let Some(ref id) = self.persona {
            let persona = Persona::find(id).ok_or_else(|| format!("unknown persona: {id}"))?;
            params = params.with_persona(persona);
        }
        if let Some(rate) = self.rate {
            params.interruptions_per_hour = rate;
        }
        if let Some(recovery) = self.recovery {
            params.recovery_minutes = recovery;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if self.random_seed {
            params.seed = draw_seed(&mut EntropySource::new()).0;
            tracing::info!(seed = params.seed, "drew random seed");
        }
        if let Some(days) = self.days {
            params.day_count = days;
        }
        if let Some(threshold) = self.threshold {
            params.threshold_minutes = threshold;
        }
        if let Some(target) = self.target {
            params.target_block_count = target;
        }

        params.validate()?;
        Ok(params)
    }
}
