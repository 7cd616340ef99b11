mod counties;
mod dataset;
mod postcode;
mod report;
mod updater;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "county_backfill",
    about = "Fill missing farm counties from the postcode in each farm's city field"
)]
struct Cli {
    /// Farms file to update in place
    #[arg(long, default_value = dataset::DEFAULT_DATA_PATH)]
    data: PathBuf,
    /// Run the full pass and print the report without writing the file
    #[arg(long)]
    dry_run: bool,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let t0 = Instant::now();

    info!(path = ?cli.data, dry_run = cli.dry_run, "Starting county backfill");

    let mut farms = dataset::load(&cli.data)
        .with_context(|| format!("Could not load farms from {:?}", cli.data))?;
    println!("Processing {} farms...", farms.len());

    let tally = updater::populate(&mut farms, |name, outcome| {
        if let Some(line) = report::outcome_line(name, outcome) {
            println!("{}", line);
        }
    });

    if cli.dry_run {
        println!("\nDry run: {:?} left unchanged", cli.data);
    } else {
        dataset::save(&cli.data, &farms)
            .with_context(|| format!("Could not save farms to {:?}", cli.data))?;
    }

    println!("\n{}", report::render_summary(&tally));

    info!(
        total = tally.total,
        updated = tally.updated,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "County backfill finished"
    );
    Ok(())
}
