//! joiner CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod join;

use config::{JoinConfig, Overrides};

#[derive(Parser)]
#[command(name = "joiner")]
#[command(version)]
#[command(about = "Concatenate files with an optional source map", long_about = None)]
struct Cli {
    /// Input files, in output order
    files: Vec<PathBuf>,

    /// Write output to FILE
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Also write FILE.map and a sourceMappingURL comment
    #[arg(short = 's', long)]
    source_map: bool,

    /// Value of the map's sourceRoot field
    #[arg(long)]
    source_root: Option<String>,

    /// Embed the inputs' text in the map
    #[arg(long)]
    sources_content: bool,

    /// Input whose lines all map to its first line (appended after FILES)
    #[arg(long)]
    synthetic: Vec<PathBuf>,

    /// TOML file describing the join
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joiner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => JoinConfig::load(path)?,
        None => JoinConfig::default(),
    };
    let config = base.merge(Overrides {
        files: cli.files,
        synthetic: cli.synthetic,
        output: cli.output,
        source_map: cli.source_map,
        source_root: cli.source_root,
        sources_content: cli.sources_content,
    });

    join::execute(&config)
}
