mod prepare;
mod presets;

/// Subcommands for cmill
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Prepare a tokenized dataset for a corpus preset.
    Prepare(prepare::PrepareArgs),

    /// List the built-in corpus presets.
    Presets(presets::PresetsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Prepare(cmd) => cmd.run(),
            Commands::Presets(cmd) => cmd.run(),
        }
    }
}
