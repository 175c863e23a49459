//! # Relief Geocoder
//!
//! Turns free-text incident descriptions into coordinates through an LLM
//! extraction step, a fallback chain of geocoding providers, and an expiring
//! result cache.

mod bootstrap;
mod commands;
mod di;

use clap::{Parser, Subcommand};
use relief_geocoder_domain::config::CacheBackend;
use relief_geocoder_domain::CliOverrides;
use std::path::PathBuf;

use bootstrap::{init_logging, load_config, log_config};
use di::{build_store, UseCases};

#[derive(Parser)]
#[command(name = "relief-geocoder")]
#[command(version)]
#[command(about = "Resolve disaster-report descriptions to coordinates")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// SQLite database path for the cache
    #[arg(long, global = true)]
    database: Option<String>,

    /// Cache backend: sqlite or memory
    #[arg(long, global = true)]
    backend: Option<CacheBackend>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Per-provider timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a place from a description and geocode it
    Locate { description: String },
    /// Geocode a place name directly
    Geocode { name: String },
    /// Extract the place mentioned in a description
    Extract { text: String },
    /// Locate every line of a file concurrently
    Batch {
        file: PathBuf,
        /// Descriptions in flight at once
        #[arg(short = 'j', long, default_value = "8")]
        concurrency: usize,
    },
    /// Drop the cached geocode for a place name
    Invalidate { name: String },
    /// Delete expired cache entries once
    Sweep,
    /// Run the periodic cache sweep until interrupted
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        database_path: cli.database,
        cache_backend: cli.backend,
        log_level: cli.log_level,
        provider_timeout_ms: cli.timeout_ms,
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    log_config(&config, cli.config.as_deref());

    let store = build_store(&config).await?;
    let use_cases = UseCases::new(&config, store);

    match cli.command {
        Command::Locate { description } => commands::locate(&use_cases, &description).await,
        Command::Geocode { name } => commands::geocode(&use_cases, &name).await,
        Command::Extract { text } => commands::extract(&use_cases, &text).await,
        Command::Batch { file, concurrency } => {
            commands::batch(&use_cases, &file, concurrency).await
        }
        Command::Invalidate { name } => commands::invalidate(&use_cases, &name).await,
        Command::Sweep => commands::sweep(&use_cases).await,
        Command::Run => commands::run(&use_cases, config.cache.sweep_interval_secs).await,
    }
}
