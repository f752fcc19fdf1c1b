//! # `cmill` dataset preparation CLI

mod commands;
mod logging;

use clap::Parser;
use commands::Commands;

/// cmill
#[derive(clap::Parser, Debug)]
#[command(author, version, about = "corpusmill dataset preparation", long_about = None)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
