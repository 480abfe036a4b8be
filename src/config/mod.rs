//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/geo-center/config.toml

pub mod defaults;

use crate::center::falloff::FalloffParams;
use crate::center::median::MedianParams;
use crate::center::{CenterKind, SolverSettings};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Geometric median tuning
    #[serde(default)]
    pub median: MedianConfig,

    /// Falloff-weighted center tuning
    #[serde(default)]
    pub falloff: FalloffConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Output defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Center used where a single point is wanted
    #[serde(default = "default_center")]
    pub center: String,
}

/// Geometric median tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedianConfig {
    /// Convergence tolerance in meters
    #[serde(default = "default_median_tolerance")]
    pub tolerance: f64,

    /// Iteration budget
    #[serde(default = "default_median_max_iterations")]
    pub max_iterations: usize,

    /// Distance floor before inverse weighting, in meters
    #[serde(default = "default_median_min_distance")]
    pub min_distance: f64,
}

/// Falloff-weighted center tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FalloffConfig {
    /// Falloff distance scale in meters
    #[serde(default = "default_falloff_scale")]
    pub scale: f64,

    /// Convergence tolerance in meters
    #[serde(default = "default_falloff_tolerance")]
    pub tolerance: f64,

    /// Iteration budget
    #[serde(default = "default_falloff_max_iterations")]
    pub max_iterations: usize,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: BTreeMap<String, String>,
}

// Default value functions for serde
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_center() -> String {
    DEFAULT_CENTER.to_string()
}
fn default_median_tolerance() -> f64 {
    DEFAULT_MEDIAN_TOLERANCE
}
fn default_median_max_iterations() -> usize {
    DEFAULT_MEDIAN_MAX_ITERATIONS
}
fn default_median_min_distance() -> f64 {
    DEFAULT_MEDIAN_MIN_DISTANCE
}
fn default_falloff_scale() -> f64 {
    DEFAULT_FALLOFF_SCALE
}
fn default_falloff_tolerance() -> f64 {
    DEFAULT_FALLOFF_TOLERANCE
}
fn default_falloff_max_iterations() -> usize {
    DEFAULT_FALLOFF_MAX_ITERATIONS
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> BTreeMap<String, String> {
    let mut providers = BTreeMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/@{lat},{lng},15z".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=12/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?ll={lat},{lng}".to_string(),
    );
    providers
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            center: default_center(),
        }
    }
}

impl Default for MedianConfig {
    fn default() -> Self {
        Self {
            tolerance: default_median_tolerance(),
            max_iterations: default_median_max_iterations(),
            min_distance: default_median_min_distance(),
        }
    }
}

impl Default for FalloffConfig {
    fn default() -> Self {
        Self {
            scale: default_falloff_scale(),
            tolerance: default_falloff_tolerance(),
            max_iterations: default_falloff_max_iterations(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

/// Require a strictly positive, finite number
fn check_positive(key: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::Config(format!(
            "Invalid {} value: {} (expected a positive number)",
            key, value
        )))
    }
}

/// Require an iteration budget of at least 1
fn check_iterations(key: &str, value: usize) -> Result<usize> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(Error::Config(format!(
            "Invalid {} value: {} (expected an integer >= 1)",
            key, value
        )))
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64> {
    let parsed = value.parse::<f64>().map_err(|_| {
        Error::Config(format!(
            "Invalid {} value: {} (expected a positive number)",
            key, value
        ))
    })?;
    check_positive(key, parsed)
}

fn parse_iterations(key: &str, value: &str) -> Result<usize> {
    let parsed = value.parse::<usize>().map_err(|_| {
        Error::Config(format!(
            "Invalid {} value: {} (expected an integer >= 1)",
            key, value
        ))
    })?;
    check_iterations(key, parsed)
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            Self::from_toml_str(&content)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| {
            Error::Config(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the solver sections with the same rules `set` applies
    pub fn validate(&self) -> Result<()> {
        check_positive("median.tolerance", self.median.tolerance)?;
        check_iterations("median.max_iterations", self.median.max_iterations)?;
        check_positive("median.min_distance", self.median.min_distance)?;
        check_positive("falloff.scale", self.falloff.scale)?;
        check_positive("falloff.tolerance", self.falloff.tolerance)?;
        check_iterations("falloff.max_iterations", self.falloff.max_iterations)?;
        self.default_center()?;
        Ok(())
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "format"] => Some(self.defaults.format.clone()),
            ["defaults", "center"] => Some(self.defaults.center.clone()),

            ["median", "tolerance"] => Some(self.median.tolerance.to_string()),
            ["median", "max_iterations"] => Some(self.median.max_iterations.to_string()),
            ["median", "min_distance"] => Some(self.median.min_distance.to_string()),

            ["falloff", "scale"] => Some(self.falloff.scale.to_string()),
            ["falloff", "tolerance"] => Some(self.falloff.tolerance.to_string()),
            ["falloff", "max_iterations"] => Some(self.falloff.max_iterations.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "format"] => {
                if crate::format::get_formatter(value).is_none() {
                    return Err(Error::Config(format!("Unknown format: {}", value)));
                }
                self.defaults.format = value.to_lowercase();
            }
            ["defaults", "center"] => {
                let kind = CenterKind::from_str(value).map_err(Error::Config)?;
                self.defaults.center = kind.to_string();
            }

            ["median", "tolerance"] => {
                self.median.tolerance = parse_positive(key, value)?;
            }
            ["median", "max_iterations"] => {
                self.median.max_iterations = parse_iterations(key, value)?;
            }
            ["median", "min_distance"] => {
                self.median.min_distance = parse_positive(key, value)?;
            }

            ["falloff", "scale"] => {
                self.falloff.scale = parse_positive(key, value)?;
            }
            ["falloff", "tolerance"] => {
                self.falloff.tolerance = parse_positive(key, value)?;
            }
            ["falloff", "max_iterations"] => {
                self.falloff.max_iterations = parse_iterations(key, value)?;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            ["url", "default"] => {
                if !self.url.providers.contains_key(value) {
                    return Err(Error::Config(format!("Unknown URL provider: {}", value)));
                }
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.format",
            "defaults.center",
            "median.tolerance",
            "median.max_iterations",
            "median.min_distance",
            "falloff.scale",
            "falloff.tolerance",
            "falloff.max_iterations",
            "server.host",
            "server.port",
            "url.default",
        ]
    }

    /// Solver parameters derived from the `[median]` and `[falloff]` sections
    pub fn solver_settings(&self) -> SolverSettings {
        SolverSettings {
            median: MedianParams {
                tolerance: self.median.tolerance,
                max_iterations: self.median.max_iterations,
                min_distance: self.median.min_distance,
            },
            falloff: FalloffParams {
                scale: self.falloff.scale,
                tolerance: self.falloff.tolerance,
                max_iterations: self.falloff.max_iterations,
            },
        }
    }

    /// The configured default center kind
    pub fn default_center(&self) -> Result<CenterKind> {
        CenterKind::from_str(&self.defaults.center).map_err(Error::Config)
    }

    /// Format a URL using the specified provider
    ///
    /// Replaces {lat} and {lng} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self.url.providers.get(provider_name).ok_or_else(|| {
            Error::Config(format!("Unknown URL provider: {}", provider_name))
        })?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
