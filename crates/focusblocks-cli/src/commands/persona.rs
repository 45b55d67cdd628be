use clap::Subcommand;
use focusblocks_core::PERSONAS;

#[derive(Subcommand)]
pub enum PersonaAction {
    /// List all presets
    List,
}

pub fn run(action: PersonaAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PersonaAction::List => {
            println!("{}", serde_json::to_string_pretty(PERSONAS)?);
        }
    }
    Ok(())
}
