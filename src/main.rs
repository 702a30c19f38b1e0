use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calamity_sim::{
    config::{ConfigLoader, ConfigOverrides, ServiceConfig},
    web,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Calamity-impact simulation service")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,

    /// Relay simulation requests to this backend instead of computing locally
    #[arg(long)]
    backend_url: Option<String>,

    /// YAML species catalog replacing the built-in table
    #[arg(long)]
    species_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ConfigLoader::new(".").load(path)?,
        None => ServiceConfig::default(),
    };
    let config = config.with_overrides(ConfigOverrides {
        host: cli.host,
        port: cli.port,
        backend_url: cli.backend_url,
        species_file: cli.species_file,
    });

    web::run(config).await
}
