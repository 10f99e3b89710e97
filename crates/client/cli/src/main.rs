//! Developer preview for the dungeon generator.
//!
//! Builds a dungeon for a seed from a data directory and prints its map,
//! the room table and the layout digest.
//! Run with: `cargo run -p dungeon-preview -- --seed 42`
mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dungeon_content::ContentFactory;
use dungeon_core::{Dungeon, GameError, PartitionStrategy};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Generate a dungeon and print its layout
#[derive(Parser)]
#[command(name = "dungeon-preview")]
#[command(about = "Generate a dungeon and print its layout", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed of the first generation pass
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Directory holding config.toml and rooms.txt (defaults to the bundled data)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Override the chain length from the config file
    #[arg(long)]
    chain_length: Option<u32>,

    /// Override the partition strategy (cap_and_carry or random_fold)
    #[arg(long, value_parser = parse_strategy)]
    partition: Option<PartitionStrategy>,

    /// Draw value tiles as plain floor
    #[arg(long)]
    hide_values: bool,
}

fn parse_strategy(value: &str) -> Result<PartitionStrategy, String> {
    value
        .parse()
        .map_err(|_| format!("unknown partition strategy `{value}`"))
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let factory = match &cli.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };

    let mut config = factory.load_config()?;
    if let Some(chain_length) = cli.chain_length {
        config.chain_length = chain_length;
    }
    if let Some(partition) = cli.partition {
        config.partition = partition;
    }
    let templates = factory.load_templates()?;
    tracing::info!(
        data_dir = %factory.data_dir().display(),
        templates = templates.len(),
        partition = %config.partition,
        "content loaded"
    );

    let dungeon = Dungeon::new(cli.seed, config, &templates)
        .map_err(|e| anyhow::anyhow!("[{}] {}", e.error_code(), e))?;

    let mut out = std::io::stdout().lock();
    render::write_map(&mut out, &dungeon, !cli.hide_values)?;
    writeln!(out)?;
    render::write_rooms(&mut out, &dungeon)?;
    writeln!(out)?;
    writeln!(
        out,
        "seed {} (requested {}), digest {}",
        dungeon.seed(),
        cli.seed,
        hex::encode(dungeon.grid().digest())
    )?;
    Ok(())
}

/// Setup logging to stderr so stdout stays a clean dump.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
