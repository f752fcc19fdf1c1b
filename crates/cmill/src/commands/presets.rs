use corpusmill_data::presets::{SourceConfig, all_presets};

/// Args for the presets command.
#[derive(clap::Args, Debug)]
pub struct PresetsArgs {}

impl PresetsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        for preset in all_presets() {
            let source = match &preset.source {
                SourceConfig::Listing(_) => "listing",
                SourceConfig::Archive(_) => "archive",
            };
            println!(
                "{:<18} source={source:<8} cleaning={:?} vocab={:?}",
                preset.name, preset.cleaning, preset.vocab,
            );
        }
        Ok(())
    }
}
