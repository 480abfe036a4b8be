//! geo-center: centers of geographic coordinate sets
//!
//! A library and CLI tool that reduces a list of (latitude, longitude)
//! points to a single representative location, using three notions of
//! "center".
//!
//! ## Features
//!
//! - Great-circle (haversine) distance
//! - Lenient line-based coordinate parsing (`lat, lon`, `[lat, lon]`, `(lat, lon)`)
//! - Centroid, geometric median (Weiszfeld) and falloff-weighted center
//! - JSON / text / GPX / map-URL output
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_center::center::compute_centers;
//! use geo_center::coord::parse::parse_coordinates;
//!
//! let points = parse_coordinates("[10.0, 20.0]\n(10.0, 20.2)\n10.2, 20.0").unwrap();
//! let centers = compute_centers(&points);
//!
//! assert!((centers.centroid.lat - 10.0667).abs() < 1e-4);
//! println!("Geometric median: {}", centers.geometric_median);
//! ```

pub mod center;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod server;

// Re-export commonly used types
pub use center::{
    compute_centers, compute_centers_with, CenterKind, CenterResults, Report, SolverSettings,
};
pub use config::Config;
pub use coord::{CoordinateSet, Coordinates};
pub use error::{Error, FormatError, Result};
