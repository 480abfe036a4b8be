//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Geometric median convergence tolerance in meters
pub const DEFAULT_MEDIAN_TOLERANCE: f64 = 1e-5;

/// Geometric median iteration budget
pub const DEFAULT_MEDIAN_MAX_ITERATIONS: usize = 100;

/// Floor for distances before inverse weighting, in meters
pub const DEFAULT_MEDIAN_MIN_DISTANCE: f64 = 1e-10;

/// Falloff distance scale in meters
pub const DEFAULT_FALLOFF_SCALE: f64 = 200_000.0;

/// Falloff center convergence tolerance in meters
pub const DEFAULT_FALLOFF_TOLERANCE: f64 = 1.0;

/// Falloff center iteration budget
pub const DEFAULT_FALLOFF_MAX_ITERATIONS: usize = 100;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default center for single-point outputs (url format)
pub const DEFAULT_CENTER: &str = "median";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "openstreetmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geo-center";
