use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Decision-analysis CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "outrank", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the alternatives of a scenario file
    Rank(RankArgs),

    /// Validate a scenario file without running it
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Scenario file (JSON, see the scenario schema)
    #[arg(value_hint = ValueHint::FilePath)]
    pub scenario: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Scenario file (JSON)
    #[arg(value_hint = ValueHint::FilePath)]
    pub scenario: PathBuf,
}
