// src/main.rs
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use call_billing_engine::io::{read_records, write_costs};
use call_billing_engine::{BatchCalculator, TariffConfig};

/// Rates a CSV batch of phone calls against a tariff and writes the
/// computed costs back out as CSV.
#[derive(Debug, Parser)]
#[command(name = "call-billing-engine", version, about)]
struct Args {
    /// Path to the headerless CSV data file (phone_number,call_start,call_end)
    data_file: PathBuf,

    /// Path to the JSON tariff configuration file
    config_file: PathBuf,

    /// Where to write the computed costs
    #[arg(short, long, default_value = "data/calculated_costs.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let tariff = TariffConfig::from_file(&args.config_file)
        .with_context(|| format!("loading tariff from {}", args.config_file.display()))?;

    let records = read_records(&args.data_file)
        .with_context(|| format!("reading call records from {}", args.data_file.display()))?;

    info!("Loaded {} call records", records.len());

    let calculator = BatchCalculator::new(tariff);
    let costs = calculator.calculate(&records)?;

    write_costs(&args.output, &records, &costs)
        .with_context(|| format!("writing costs to {}", args.output.display()))?;

    info!("✅ Costs written to {}", args.output.display());
    Ok(())
}
