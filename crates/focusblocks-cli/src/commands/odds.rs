//! Success-rate table across session lengths and targets.

use clap::Args;
use serde::Serialize;

use focusblocks_core::{success_rate, Config, DayResult, DEFAULT_THRESHOLDS};

use super::params::ParamArgs;

#[derive(Args)]
pub struct OddsArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Highest target to tabulate
    #[arg(long, default_value = "4")]
    pub max_target: u32,
    /// Print the rows as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct OddsRow {
    threshold_minutes: u32,
    target_block_count: u32,
    success_rate: f64,
}

pub fn run(args: OddsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let params = args.params.resolve(&config)?;
    let days = params.run()?;
    let rows = odds_rows(&days, args.max_target)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render(&rows, args.max_target, days.len()));
    }
    Ok(())
}

fn odds_rows(days: &[DayResult], max_target: u32) -> focusblocks_core::error::Result<Vec<OddsRow>> {
    let mut rows = Vec::new();
    for threshold in DEFAULT_THRESHOLDS {
        for target in 1..=max_target {
            rows.push(OddsRow {
                threshold_minutes: threshold,
                target_block_count: target,
                success_rate: success_rate(days, threshold as f64, target)?,
            });
        }
    }
    Ok(rows)
}

/// Targets down the side, session lengths across the top.
fn render(rows: &[OddsRow], max_target: u32, day_count: usize) -> String {
    let mut out = format!("Chance of a day with N sessions ({day_count} days)\n");
    out.push_str("     N");
    for threshold in DEFAULT_THRESHOLDS {
        out.push_str(&format!("  {:>6}", format!("{threshold}m")));
    }
    out.push('\n');

    for target in 1..=max_target {
        out.push_str(&format!("{target:>6}"));
        for threshold in DEFAULT_THRESHOLDS {
            let rate = rows
                .iter()
                .find(|r| r.threshold_minutes == threshold && r.target_block_count == target)
                .map_or(0.0, |r| r.success_rate);
            out.push_str(&format!("  {:>5.0}%", rate * 100.0));
        }
        out.push('\n');
    }
    out
}
