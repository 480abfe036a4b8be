//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod compute;
pub mod config;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Find the centroid, geometric median and weighted center of coordinates
#[derive(Parser)]
#[command(name = "geo-center")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute centers for a list of coordinates
    Compute(compute::ComputeArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show version, solver settings and server status
    Status(status::StatusArgs),
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `default_level`
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve(_) => "info",
        _ => "warn",
    };
    init_logging(default_level);

    match cli.command {
        Commands::Compute(args) => compute::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}
