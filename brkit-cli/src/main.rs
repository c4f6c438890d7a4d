//! brkit command-line entry point

use anyhow::Result;
use brkit_cli::commands::Commands;
use clap::Parser;

/// Find character, word, sentence and line boundaries in text files
#[derive(Debug, Parser)]
#[command(name = "brkit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
