//! Expected-capacity heatmap command.

use clap::Args;
use focusblocks_core::{CapacityHeatmap, Config, HeatmapCell, SweepAxes};

#[derive(Args)]
pub struct HeatmapArgs {
    /// Focus session length in minutes (defaults to heatmap.threshold_minutes)
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Simulated days per cell (defaults to the configured value)
    #[arg(long)]
    pub trials: Option<usize>,
    /// Print the grid as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: HeatmapArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let threshold = args.threshold.unwrap_or(config.heatmap.threshold_minutes);
    let trials = args.trials.unwrap_or(config.heatmap.trials_per_cell);

    let heatmap = CapacityHeatmap::sweep(&SweepAxes::default(), threshold, trials)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&heatmap)?);
    } else {
        print!("{}", render(&heatmap));
    }
    Ok(())
}

fn heat_char(cell: &HeatmapCell, max: f64) -> char {
    let heat = cell.intensity(max);
    if heat == 0.0 {
        ' '
    } else if heat <= 0.25 {
        '░'
    } else if heat <= 0.5 {
        '▒'
    } else if heat <= 0.75 {
        '▓'
    } else {
        '█'
    }
}

fn render(heatmap: &CapacityHeatmap) -> String {
    let mut out = format!(
        "Expected {}-min sessions per day ({} trials per cell, max {:.1})\n",
        heatmap.threshold_minutes, heatmap.trials_per_cell, heatmap.max_expected_capacity
    );

    for row in &heatmap.rows {
        let Some(first) = row.first() else { continue };
        out.push_str(&format!("Δ={:>4} ", first.recovery_minutes));
        for cell in row {
            let c = heat_char(cell, heatmap.max_expected_capacity);
            out.push(c);
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }

    if let Some(first_row) = heatmap.rows.first() {
        out.push_str("λ=     ");
        for cell in first_row {
            out.push_str(&format!("{:<3}", cell.rate_per_hour));
        }
        out.push('\n');
    }
    out
}
