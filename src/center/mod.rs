//! Center estimation
//!
//! Three definitions of "center" for a set of coordinates:
//! - Centroid: arithmetic mean of latitudes and longitudes
//! - Geometric median: minimizes summed great-circle distance (Weiszfeld)
//! - Weighted center: exponential falloff toward the densest cluster
//!
//! The two iterative centers share one fixed-point engine
//! (`iterative::solve_with_report`) and differ only in their weight function.

pub mod aggregate;
pub mod falloff;
pub mod iterative;
pub mod median;

use crate::coord::{CoordinateSet, Coordinates};
use falloff::FalloffParams;
use median::MedianParams;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use aggregate::{centroid, weighted_average};
pub use falloff::weighted_center;
pub use median::geometric_median;

/// The kinds of center this crate computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterKind {
    /// Arithmetic mean
    Centroid,
    /// Geometric median
    Median,
    /// Falloff-weighted center
    Weighted,
}

impl CenterKind {
    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Centroid => "Arithmetic mean of all points",
            Self::Median => "Geometric median, robust to outliers",
            Self::Weighted => "Center of the densest cluster (exponential falloff)",
        }
    }

    /// Display label, e.g. for map markers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Centroid => "Centroid",
            Self::Median => "Geometric Median",
            Self::Weighted => "Weighted Center",
        }
    }
}

impl std::fmt::Display for CenterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Centroid => write!(f, "centroid"),
            Self::Median => write!(f, "median"),
            Self::Weighted => write!(f, "weighted"),
        }
    }
}

impl std::str::FromStr for CenterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "centroid" | "mean" => Ok(Self::Centroid),
            "median" | "geometric_median" | "geometric-median" | "geom_median" => {
                Ok(Self::Median)
            }
            "weighted" | "weighted_center" | "weighted-center" | "falloff" => {
                Ok(Self::Weighted)
            }
            _ => Err(format!("Unknown center kind: {}", s)),
        }
    }
}

/// List all center kinds, in output order
pub fn available_kinds() -> Vec<CenterKind> {
    vec![CenterKind::Centroid, CenterKind::Median, CenterKind::Weighted]
}

/// Parameters for both iterative solvers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SolverSettings {
    pub median: MedianParams,
    pub falloff: FalloffParams,
}

/// All three centers for one input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterResults {
    pub centroid: Coordinates,
    pub geometric_median: Coordinates,
    pub weighted_center: Coordinates,
}

impl CenterResults {
    /// Select one center by kind
    pub fn get(&self, kind: CenterKind) -> Coordinates {
        match kind {
            CenterKind::Centroid => self.centroid,
            CenterKind::Median => self.geometric_median,
            CenterKind::Weighted => self.weighted_center,
        }
    }

    /// Iterate `(kind, center)` pairs in `available_kinds` order
    pub fn iter(&self) -> impl Iterator<Item = (CenterKind, Coordinates)> + '_ {
        available_kinds().into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Compute all three centers with the default solver parameters
pub fn compute_centers(coords: &CoordinateSet) -> CenterResults {
    compute_centers_with(coords, &SolverSettings::default())
}

/// Compute all three centers with explicit solver parameters
pub fn compute_centers_with(coords: &CoordinateSet, settings: &SolverSettings) -> CenterResults {
    let median = median::geometric_median_with(coords, &settings.median);
    let weighted = falloff::weighted_center_with(coords, &settings.falloff);

    debug!(
        points = coords.len(),
        median_iterations = median.iterations,
        median_converged = median.converged,
        weighted_iterations = weighted.iterations,
        weighted_converged = weighted.converged,
        "computed centers"
    );

    CenterResults {
        centroid: centroid(coords),
        geometric_median: median.center,
        weighted_center: weighted.center,
    }
}

/// Input points together with their computed centers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The points the centers were computed from, in input order
    pub points: CoordinateSet,
    /// The three centers
    pub centers: CenterResults,
}

impl Report {
    /// Compute all centers for `points` with the given settings
    pub fn new(points: CoordinateSet, settings: &SolverSettings) -> Self {
        let centers = compute_centers_with(&points, settings);
        Self { points, centers }
    }
}
