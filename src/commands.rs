use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{CheckArgs, Cli, RankArgs};
use crate::scenario::Scenario;

pub fn rank(cli: &Cli, args: &RankArgs) -> Result<()> {
    let scenario = read_scenario(&args.scenario)?;

    if cli.verbose > 0 {
        eprintln!("[rank] scenario={}", args.scenario.display());
    }

    let report = scenario.run()?;

    if cli.verbose > 0 {
        eprintln!("[rank] method={} alternatives={}", report.method, report.ranking.len());
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &report)?;
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

pub fn check(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let scenario = read_scenario(&args.scenario)?;

    if cli.verbose > 0 {
        eprintln!("[check] scenario={}", args.scenario.display());
    }

    // Running the scenario exercises the full validation path; the
    // report is discarded.
    scenario.run()?;
    println!("OK: {}", args.scenario.display());

    Ok(())
}

fn read_scenario(path: &Path) -> Result<Scenario> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open scenario file: {}", path.display()))?;
    let scenario = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse scenario file: {}", path.display()))?;
    Ok(scenario)
}
