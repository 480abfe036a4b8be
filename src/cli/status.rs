//! Status command handler
//!
//! Shows version, solver settings and whether a server is reachable.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Check if server is running (tries to connect)
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;

    println!("geo-center v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let settings = config.solver_settings();
    println!("Geometric median:");
    println!("  tolerance:      {} m", settings.median.tolerance);
    println!("  max_iterations: {}", settings.median.max_iterations);
    println!("  min_distance:   {} m", settings.median.min_distance);
    println!("Weighted center:");
    println!("  scale:          {} m", settings.falloff.scale);
    println!("  tolerance:      {} m", settings.falloff.tolerance);
    println!("  max_iterations: {}", settings.falloff.max_iterations);
    println!();

    if args.server {
        check_server_status(&config).await;
    }

    Ok(())
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(status) = response.json::<serde_json::Value>().await {
                    if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                        println!("  Version: {}", version);
                    }
                    if let Some(uptime) = status.get("uptime_secs").and_then(|v| v.as_u64()) {
                        println!("  Uptime: {}s", uptime);
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
}
