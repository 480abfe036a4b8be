//! Centralized constants for the geo-center crate
//!
//! Solver tuning defaults live in `config::defaults`; this module holds
//! the fixed physical constants.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
}
