//! Falloff-weighted center
//!
//! Exponential reweighting: each point counts with `exp(-d / scale)`, so
//! distant points fade out and the estimate is pulled toward the densest
//! cluster. A smaller `scale` favors local clusters more strongly.

use crate::center::iterative::{self, Estimate, IterationParams};
use crate::config::defaults::{
    DEFAULT_FALLOFF_MAX_ITERATIONS, DEFAULT_FALLOFF_SCALE, DEFAULT_FALLOFF_TOLERANCE,
};
use crate::coord::{CoordinateSet, Coordinates};
use serde::{Deserialize, Serialize};

/// Tuning for the falloff-weighted center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FalloffParams {
    /// Distance (meters) over which a point's weight drops by a factor of e
    pub scale: f64,
    /// Convergence threshold in meters
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
}

impl Default for FalloffParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_FALLOFF_SCALE,
            tolerance: DEFAULT_FALLOFF_TOLERANCE,
            max_iterations: DEFAULT_FALLOFF_MAX_ITERATIONS,
        }
    }
}

/// Exponential falloff weight
pub fn falloff_weight(distance: f64, scale: f64) -> f64 {
    (-distance / scale).exp()
}

/// Falloff-weighted center with default parameters
pub fn weighted_center(coords: &CoordinateSet) -> Coordinates {
    weighted_center_with(coords, &FalloffParams::default()).center
}

/// Falloff-weighted center with explicit parameters
pub fn weighted_center_with(coords: &CoordinateSet, params: &FalloffParams) -> Estimate {
    let scale = params.scale;
    iterative::solve_with_report(
        coords,
        |d| falloff_weight(d, scale),
        IterationParams {
            tolerance: params.tolerance,
            max_iterations: params.max_iterations,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::center::aggregate::centroid;
    use crate::coord::distance::haversine_distance;
    use approx::assert_abs_diff_eq;

    fn set(points: &[(f64, f64)]) -> CoordinateSet {
        CoordinateSet::new(points.iter().copied().map(Coordinates::from).collect()).unwrap()
    }

    #[test]
    fn test_default_params() {
        let params = FalloffParams::default();
        assert_eq!(params.scale, 200_000.0);
        assert_eq!(params.tolerance, 1.0);
        assert_eq!(params.max_iterations, 100);
    }

    #[test]
    fn test_falloff_weight() {
        assert_eq!(falloff_weight(0.0, 200_000.0), 1.0);
        assert_abs_diff_eq!(
            falloff_weight(200_000.0, 200_000.0),
            std::f64::consts::E.recip(),
            epsilon = 1e-15
        );
        assert!(falloff_weight(1_000.0, 200_000.0) > falloff_weight(2_000.0, 200_000.0));
    }

    #[test]
    fn test_single_point() {
        let p = Coordinates::new(-33.8688, 151.2093);
        let coords = CoordinateSet::new(vec![p]).unwrap();
        let center = weighted_center(&coords);

        assert_abs_diff_eq!(center.lat, p.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(center.lng, p.lng, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_square() {
        let coords = set(&[(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)]);
        let center = weighted_center(&coords);

        assert_abs_diff_eq!(center.lat, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.lng, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pulled_toward_dense_cluster() {
        // Dense cluster near (0, 0), a sparse pair ~3 degrees away
        let coords = set(&[
            (0.0, 0.0),
            (0.05, 0.0),
            (0.0, 0.05),
            (-0.05, 0.0),
            (0.0, -0.05),
            (0.02, 0.02),
            (3.0, 3.0),
            (3.1, 2.9),
        ]);
        let cluster = Coordinates::new(0.0, 0.0);

        let mean = centroid(&coords);
        let center = weighted_center(&coords);

        assert!(haversine_distance(center, cluster) < haversine_distance(mean, cluster));
    }

    #[test]
    fn test_smaller_scale_prefers_local_cluster() {
        let coords = set(&[
            (0.0, 0.0),
            (0.1, 0.0),
            (0.0, 0.1),
            (2.0, 2.0),
            (2.1, 2.0),
        ]);
        let cluster = Coordinates::new(0.0333, 0.0333);

        let wide = weighted_center_with(
            &coords,
            &FalloffParams {
                scale: 1_000_000.0,
                ..FalloffParams::default()
            },
        );
        let narrow = weighted_center_with(
            &coords,
            &FalloffParams {
                scale: 50_000.0,
                ..FalloffParams::default()
            },
        );

        assert!(
            haversine_distance(narrow.center, cluster) < haversine_distance(wide.center, cluster)
        );
    }

    #[test]
    fn test_tiny_scale_does_not_panic() {
        // Every weight underflows to zero; the centroid is kept
        let coords = set(&[(0.0, 0.0), (10.0, 10.0)]);
        let estimate = weighted_center_with(
            &coords,
            &FalloffParams {
                scale: 1e-3,
                ..FalloffParams::default()
            },
        );

        assert!(!estimate.converged);
        assert_eq!(estimate.iterations, 0);
        assert_abs_diff_eq!(estimate.center.lat, 5.0);
        assert_abs_diff_eq!(estimate.center.lng, 5.0);
    }
}
