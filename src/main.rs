use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use provincias_rust::sdk::{
    config::ConversionConfig, convert::convert_file, util::log::init_logging,
};

/// Converts Ecuador's province/canton/parish CSV into a nested JSON hierarchy
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input CSV path [env: PROVINCIAS_INPUT] [default: codificacion.csv]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON path [env: PROVINCIAS_OUTPUT] [default: provincias.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip printing the first province as a sample
    #[arg(long)]
    no_sample: bool,
}

fn main() -> ExitCode {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("❌ Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = ConversionConfig::from_env().with_overrides(cli.input.clone(), cli.output.clone());

    let report = convert_file(&config)
        .with_context(|| format!("Conversion of {} failed", config.input.display()))?;

    log::info!("✅ Conversion completed successfully!");
    log::info!("📊 Generated data for {} provinces", report.provinces.len());
    log::info!("📈 Statistics:\n{}", report.stats());

    if !cli.no_sample {
        if let Some(first) = report.provinces.first() {
            let sample = first
                .to_pretty_json()
                .context("Failed to render sample province")?;
            log::info!("📋 Sample data (first province):\n{}", sample);
        }
    }

    Ok(())
}
