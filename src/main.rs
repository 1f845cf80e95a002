use anyhow::Result;
use clap::Parser;

use outrank::cli::{Cli, Commands};
use outrank::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Rank(args) => commands::rank(&cli, args),
        Commands::Check(args) => commands::check(&cli, args),
    }
}
