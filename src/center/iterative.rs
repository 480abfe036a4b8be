//! Fixed-point center iteration
//!
//! Shared engine behind the geometric median and the falloff-weighted
//! center. Starting at the centroid, each step weights every point by a
//! function of its distance to the current estimate and re-averages:
//!
//! ```text
//! current = centroid(points)
//! loop up to max_iterations:
//!     w_i  = weight_fn(distance(current, p_i))
//!     next = weighted_average(points, w)
//!     converged = distance(current, next) < tolerance
//!     current = next
//!     if converged: stop
//! ```
//!
//! Running out of iterations is not an error; the last estimate is returned.

use crate::center::aggregate::{centroid, weighted_average};
use crate::coord::distance::haversine_distance;
use crate::coord::{CoordinateSet, Coordinates};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Stopping rule for the iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationParams {
    /// Stop once a step moves less than this many meters
    pub tolerance: f64,
    /// Upper bound on reweighting steps
    pub max_iterations: usize,
}

/// Outcome of a solver run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Final center estimate
    pub center: Coordinates,
    /// Reweighting steps performed
    pub iterations: usize,
    /// Whether the last step moved less than the tolerance
    pub converged: bool,
}

/// Run the fixed-point iteration and return only the center
pub fn solve<F>(coords: &CoordinateSet, weight_fn: F, params: IterationParams) -> Coordinates
where
    F: Fn(f64) -> f64,
{
    solve_with_report(coords, weight_fn, params).center
}

/// Run the fixed-point iteration, reporting iteration count and convergence
///
/// If every weight comes out as zero (possible when the weight function
/// underflows for all points), no step can be taken and the current
/// estimate is returned with `converged: false`.
pub fn solve_with_report<F>(coords: &CoordinateSet, weight_fn: F, params: IterationParams) -> Estimate
where
    F: Fn(f64) -> f64,
{
    let mut current = centroid(coords);
    let mut weights = Vec::with_capacity(coords.len());

    for iteration in 1..=params.max_iterations {
        weights.clear();
        weights.extend(
            coords
                .iter()
                .map(|point| weight_fn(haversine_distance(current, *point))),
        );

        let total: f64 = weights.iter().sum();
        if total == 0.0 || !total.is_finite() {
            warn!(iteration, total, "weights collapsed; keeping current estimate");
            return Estimate {
                center: current,
                iterations: iteration - 1,
                converged: false,
            };
        }

        let next = weighted_average(coords, &weights);
        let step = haversine_distance(current, next);
        trace!(iteration, step, "center iteration");

        current = next;
        if step < params.tolerance {
            debug!(iteration, "center iteration converged");
            return Estimate {
                center: current,
                iterations: iteration,
                converged: true,
            };
        }
    }

    warn!(
        max_iterations = params.max_iterations,
        "center iteration did not converge; returning last estimate"
    );
    Estimate {
        center: current,
        iterations: params.max_iterations,
        converged: false,
    }
}
