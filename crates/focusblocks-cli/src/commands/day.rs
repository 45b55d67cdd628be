//! Single-day view of a batch.

use clap::Args;

use focusblocks_core::{
    clock_label, BlockBand, Config, DayResult, SimulationParameters, DAY_LENGTH_MINUTES,
};

use super::params::ParamArgs;

/// Minutes covered by one character of a day strip.
const STRIP_SLOT_MINUTES: f64 = 10.0;

#[derive(Args)]
pub struct DayArgs {
    /// Zero-based day index (defaults to the day in --link, else 0)
    pub index: Option<usize>,
    #[command(flatten)]
    pub params: ParamArgs,
    /// Print the raw day as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let params = args.params.resolve(&config)?;
    let index = args.index.or(params.day_in_range()).unwrap_or(0);
    if index >= params.day_count {
        return Err(format!(
            "day {index} out of range: batch has {} days",
            params.day_count
        )
        .into());
    }

    let days = params.run()?;
    let day = &days[index];
    if args.json {
        println!("{}", serde_json::to_string_pretty(day)?);
    } else {
        print!("{}", render_day(day, &params));
    }
    Ok(())
}

fn render_day(day: &DayResult, params: &SimulationParameters) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Day {} (seed {}, {}/h, {} min recovery)\n",
        day.day_index, params.seed, params.interruptions_per_hour, params.recovery_minutes
    ));
    out.push_str(&format!("{}\n", render_strip(day)));
    out.push_str(&format!(
        "Interruptions: {}  Focus: {:.0} min  Longest: {:.0} min\n",
        day.interruption_count, day.total_focus_minutes, day.longest_block_duration
    ));
    for block in &day.blocks {
        out.push_str(&format!(
            "  {} {:>7} - {:<7} {:>5.1} min\n",
            BlockBand::from_duration(block.duration).glyph(),
            clock_label(block.start),
            clock_label(block.end),
            block.duration
        ));
    }
    let capacity = day.capacity(params.threshold_minutes);
    let verdict = if capacity >= params.target_block_count {
        "goal met"
    } else {
        "goal missed"
    };
    out.push_str(&format!(
        "Fits {capacity} x {} min sessions ({verdict})\n",
        params.threshold_minutes
    ));
    out
}

/// One character per slot: block band glyph, `|` for an interruption, `·` otherwise.
fn render_strip(day: &DayResult) -> String {
    let slots = (DAY_LENGTH_MINUTES / STRIP_SLOT_MINUTES) as usize;
    (0..slots)
        .map(|i| {
            let from = i as f64 * STRIP_SLOT_MINUTES;
            let to = from + STRIP_SLOT_MINUTES;
            let mid = from + STRIP_SLOT_MINUTES / 2.0;
            if let Some(block) = day.blocks.iter().find(|b| b.start <= mid && mid < b.end) {
                BlockBand::from_duration(block.duration).glyph()
            } else if day
                .interruption_timestamps
                .iter()
                .any(|&t| from <= t && t < to)
            {
                '|'
            } else {
                '·'
            }
        })
        .collect()
}
