//! Terminal inventory report.
//!
//! Loads an inventory from a data directory, totals its Bulk and prints
//! encumbrance and container fullness.
//!
//! ```bash
//! BULK_STRENGTH_MOD=3 cargo run -p bulk-cli -- --data-dir data --size small
//! ```
mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bulk_content::ContentFactory;
use bulk_core::Size;
use clap::Parser;
use config::CliConfig;

/// Inventory Bulk report
#[derive(Parser)]
#[command(name = "bulk")]
#[command(about = "Total carried Bulk, encumbrance and container fullness", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding inventory.ron and optional config.toml / stacks.toml
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Carrier size (tiny, small, medium, large, huge, gargantuan)
    #[arg(short, long, value_name = "SIZE", value_parser = parse_size)]
    size: Option<Size>,

    /// Carrier strength modifier
    #[arg(long, value_name = "MOD", allow_negative_numbers = true)]
    strength: Option<i32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Totals, encumbrance and per-container fullness
    Summary,
    /// Full JSON output
    Json,
}

fn parse_size(value: &str) -> Result<Size, String> {
    value
        .parse()
        .map_err(|_| format!("unknown size '{value}'"))
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(size) = cli.size {
        config.actor_size = size;
    }
    if let Some(strength) = cli.strength {
        config.strength = strength;
    }

    let factory = ContentFactory::new(&config.data_dir);
    let bulk_config = config.bulk_config(factory.load_config()?);
    let definitions = factory.load_stack_definitions()?;
    let records = factory.load_inventory()?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        items = records.len(),
        size = %config.actor_size,
        "loaded inventory"
    );

    let report = report::build_report(&records, &definitions, &bulk_config, &config)?;
    match cli.format {
        OutputFormat::Summary => print!("{}", report::render_summary(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}

/// Logs go to stderr so report output stays pipeable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
