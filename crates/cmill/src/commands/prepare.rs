use corpusmill_data::{
    cache::{CacheState, resolve_data_dir},
    pipeline::prepare_dataset,
    presets::{RAW_CORPUS_FILE, find_preset},
};

use crate::logging::LogArgs;

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    /// Corpus preset to prepare.
    preset: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Root directory for dataset artifacts.
    #[arg(long, default_value = "~/.cache/corpusmill/data")]
    data_dir: String,

    /// Refetch the raw corpus even if it is cached.
    #[arg(long)]
    refresh: bool,
}

impl PrepareArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let preset =
            find_preset(&self.preset).ok_or_else(|| format!("unknown preset: {}", self.preset))?;

        let data_dir = resolve_data_dir(&self.data_dir)?;
        let dataset_dir = data_dir.join(preset.name);
        let raw_path = dataset_dir.join(RAW_CORPUS_FILE);

        let cache = if self.refresh {
            CacheState::force_miss(&raw_path)
        } else {
            CacheState::probe(&raw_path)
        };

        let summary = prepare_dataset(&preset, &cache, &dataset_dir)?;

        log::info!("wrote {}", summary.artifacts.train.display());
        log::info!("wrote {}", summary.artifacts.val.display());
        if summary.artifacts.meta.exists() {
            log::info!("wrote {}", summary.artifacts.meta.display());
        }

        Ok(())
    }
}
