//! Batch simulation command.

use clap::Args;
use serde::Serialize;

use focusblocks_core::{BatchSummary, Config, DayResult, SimulationParameters};

use super::params::ParamArgs;

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Print the full batch, every day included, as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    parameters: &'a SimulationParameters,
    persona: Option<&'static str>,
    success_rate: f64,
    summary: &'a BatchSummary,
    days: &'a [DayResult],
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let params = args.params.resolve(&config)?;
    let days = params.run()?;
    let success_rate = params.success_rate(&days)?;
    let summary = BatchSummary::from_days(&days);

    if args.json {
        let report = RunReport {
            parameters: &params,
            persona: params.persona().map(|p| p.id),
            success_rate,
            summary: &summary,
            days: &days,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&params, success_rate, &summary));
    }
    Ok(())
}

fn render(params: &SimulationParameters, success_rate: f64, summary: &BatchSummary) -> String {
    let mut out = format!(
        "{} days, seed {}, {}/h, {} min recovery",
        summary.day_count, params.seed, params.interruptions_per_hour, params.recovery_minutes
    );
    if let Some(persona) = params.persona() {
        out.push_str(&format!(" ({})", persona.label));
    }
    out.push('\n');

    out.push_str(&format!(
        "Goal: {} x {} min sessions per day\n",
        params.target_block_count, params.threshold_minutes
    ));
    out.push_str(&format!("Success rate: {:.1}%\n\n", success_rate * 100.0));
    out.push_str(&format!("Interruptions/day  {:>6.1}\n", summary.mean_interruptions));
    out.push_str(&format!(
        "Focus min/day      {:>6.0}  (min {:.0}, max {:.0})\n",
        summary.mean_focus_minutes, summary.min_focus_minutes, summary.max_focus_minutes
    ));
    out.push_str(&format!("Longest block      {:>6.0}\n\n", summary.mean_longest_block));

    out.push_str("Session   Mean/day   Days with one\n");
    for row in &summary.thresholds {
        out.push_str(&format!(
            "{:>3} min   {:>8.2}   {:>13}\n",
            row.threshold_minutes, row.mean_capacity, row.days_with_capacity
        ));
    }
    out
}
