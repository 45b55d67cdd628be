use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "focusblocks-cli", version, about = "Focus Blocks CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a batch and report the success rate
    Simulate(commands::simulate::SimulateArgs),
    /// Show one day of the batch
    Day(commands::day::DayArgs),
    /// Success-rate table for each session length and target
    Odds(commands::odds::OddsArgs),
    /// Expected-capacity heatmap over rate and recovery time
    Heatmap(commands::heatmap::HeatmapArgs),
    /// Closed-form cost of an interruption rate
    Impact(commands::impact::ImpactArgs),
    /// Work-environment presets
    Persona {
        #[command(subcommand)]
        action: commands::persona::PersonaAction,
    },
    /// Share-link encoding
    Link {
        #[command(subcommand)]
        action: commands::link::LinkAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::Day(args) => commands::day::run(args),
        Commands::Odds(args) => commands::odds::run(args),
        Commands::Heatmap(args) => commands::heatmap::run(args),
        Commands::Impact(args) => commands::impact::run(args),
        Commands::Persona { action } => commands::persona::run(action),
        Commands::Link { action } => commands::link::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
