//! Share-link commands.

use clap::Subcommand;
use focusblocks_core::{Config, SimulationParameters};

use super::params::ParamArgs;

#[derive(Subcommand)]
pub enum LinkAction {
    /// Encode parameters as a query string or link
    Encode {
        #[command(flatten)]
        params: ParamArgs,
        /// Page to attach the query to
        #[arg(long)]
        base: Option<String>,
        /// Day of the batch the link should open on
        #[arg(long)]
        day: Option<usize>,
    },
    /// Decode a link or query string into parameters
    Decode {
        /// Full link or query string
        link: String,
    },
}

pub fn run(action: LinkAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LinkAction::Encode { params, base, day } => {
            let config = Config::load()?;
            let mut params = params.resolve(&config)?;
            if let Some(day) = day {
                if day >= params.day_count {
                    return Err(format!(
                        "day {day} out of range: batch has {} days",
                        params.day_count
                    )
                    .into());
                }
                params.selected_day = Some(day);
            }
            match base {
                Some(base) => println!("{}", params.to_link(&base)?),
                None => println!("{}", params.to_query()),
            }
        }
        LinkAction::Decode { link } => {
            let params = SimulationParameters::from_link(&link)?;
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
    }
    Ok(())
}
