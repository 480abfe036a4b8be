//! Geometric median (Weiszfeld's algorithm)
//!
//! Inverse-distance reweighting of the shared fixed-point iteration. The
//! result approximates the point minimizing the summed distance to all
//! inputs, which makes it far less sensitive to outliers than the centroid.

use crate::center::iterative::{self, Estimate, IterationParams};
use crate::config::defaults::{
    DEFAULT_MEDIAN_MAX_ITERATIONS, DEFAULT_MEDIAN_MIN_DISTANCE, DEFAULT_MEDIAN_TOLERANCE,
};
use crate::coord::{CoordinateSet, Coordinates};
use serde::{Deserialize, Serialize};

/// Tuning for the geometric median
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedianParams {
    /// Convergence threshold in meters
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
    /// Distances below this (meters) are raised to it before inverting,
    /// so a point sitting on the estimate cannot produce an infinite weight
    pub min_distance: f64,
}

impl Default for MedianParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_MEDIAN_TOLERANCE,
            max_iterations: DEFAULT_MEDIAN_MAX_ITERATIONS,
            min_distance: DEFAULT_MEDIAN_MIN_DISTANCE,
        }
    }
}

impl MedianParams {
    fn iteration(&self) -> IterationParams {
        IterationParams {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Inverse-distance weight with a floor on the distance
pub fn inverse_distance_weight(distance: f64, min_distance: f64) -> f64 {
    1.0 / distance.max(min_distance)
}

/// Geometric median with default parameters
pub fn geometric_median(coords: &CoordinateSet) -> Coordinates {
    geometric_median_with(coords, &MedianParams::default()).center
}

/// Geometric median with explicit parameters
pub fn geometric_median_with(coords: &CoordinateSet, params: &MedianParams) -> Estimate {
    let floor = params.min_distance;
    iterative::solve_with_report(
        coords,
        |d| inverse_distance_weight(d, floor),
        params.iteration(),
    )
}
