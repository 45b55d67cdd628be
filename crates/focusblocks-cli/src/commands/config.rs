//! Config file commands.

use clap::Subcommand;
use focusblocks_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value
    Get {
        /// Dot-path key under `simulation`, `goal` or `heatmap`
        /// (e.g. "simulation.seed", "goal.target_block_count", "heatmap.threshold_minutes")
        key: String,
    },
    /// Change one value; the result must still be a valid simulation
    Set {
        /// Dot-path key, as for `get`
        key: String,
        /// New value (numbers keep their type; negative seeds are allowed)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the whole config as JSON
    List,
    /// Overwrite the config file with the defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match action {
        ConfigAction::Reset => Config::default(),
        _ => Config::load()?,
    };

    match action {
        ConfigAction::Get { key } => {
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => println!("{}", serde_json::to_string_pretty(&config)?),
        ConfigAction::Reset => {
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
