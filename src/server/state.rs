//! Server shared state
//!
//! Holds configuration for the HTTP server.

use crate::center::SolverSettings;
use crate::config::Config;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    /// When the server started
    started: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            started: Instant::now(),
        }
    }

    /// Solver parameters from the current configuration
    pub async fn solver_settings(&self) -> SolverSettings {
        self.config.read().await.solver_settings()
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
