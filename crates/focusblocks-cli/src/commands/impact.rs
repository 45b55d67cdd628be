//! Interruption cost command.

use clap::Args;
use focusblocks_core::{Config, ImpactEstimate, Persona};

#[derive(Args)]
pub struct ImpactArgs {
    /// Start from a preset
    #[arg(long)]
    pub persona: Option<String>,
    /// Interruptions per hour
    #[arg(long)]
    pub rate: Option<f64>,
    /// Recovery minutes after each interruption
    #[arg(long)]
    pub recovery: Option<f64>,
}

pub fn run(args: ImpactArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut rate = config.simulation.rate_per_hour;
    let mut recovery = config.simulation.recovery_minutes;

    if let Some(ref id) = args.persona {
        let persona = Persona::find(id).ok_or_else(|| format!("unknown persona: {id}"))?;
        rate = persona.interruptions_per_hour;
        recovery = persona.recovery_minutes;
    }
    let impact = ImpactEstimate::new(args.rate.unwrap_or(rate), args.recovery.unwrap_or(recovery))?;

    println!("{}", serde_json::to_string_pretty(&impact)?);
    Ok(())
}
