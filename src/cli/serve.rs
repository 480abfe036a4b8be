//! Serve command handler
//!
//! Runs the center API in the foreground using the configured solver
//! parameters, with `--host`/`--port` taking precedence over the file.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::info;

/// Serve command arguments
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Overlay the command-line bind address onto a loaded config
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = args.apply(Config::load()?);
    let settings = config.solver_settings();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.server_addr(),
        "starting geo-center server"
    );
    info!(
        median_tolerance = settings.median.tolerance,
        median_max_iterations = settings.median.max_iterations,
        median_min_distance = settings.median.min_distance,
        falloff_scale = settings.falloff.scale,
        falloff_tolerance = settings.falloff.tolerance,
        falloff_max_iterations = settings.falloff.max_iterations,
        "solver settings"
    );

    server::run(config).await
}
