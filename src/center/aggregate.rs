//! Weighted averaging of coordinates
//!
//! Latitude and longitude are averaged independently as plain numbers.
//! There is no spherical correction; the iterative solvers rely on the same
//! planar mean so all three centers are comparable.

use crate::coord::{CoordinateSet, Coordinates};

/// Weighted mean of `coords`
///
/// # Panics
/// If `weights.len() != coords.len()` or the weights do not sum to a
/// finite, non-zero value. Both are bugs in the caller.
pub fn weighted_average(coords: &CoordinateSet, weights: &[f64]) -> Coordinates {
    assert_eq!(
        weights.len(),
        coords.len(),
        "weight vector length must match coordinate count"
    );

    let total: f64 = weights.iter().sum();
    assert!(
        total != 0.0 && total.is_finite(),
        "weights must sum to a finite non-zero value, got {}",
        total
    );

    let (lat_sum, lng_sum) = coords
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(lat, lng), (c, w)| (lat + w * c.lat, lng + w * c.lng));

    Coordinates::new(lat_sum / total, lng_sum / total)
}

/// Unweighted arithmetic mean of `coords`
pub fn centroid(coords: &CoordinateSet) -> Coordinates {
    weighted_average(coords, &vec![1.0; coords.len()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn set(points: &[(f64, f64)]) -> CoordinateSet {
        CoordinateSet::new(points.iter().copied().map(Coordinates::from).collect()).unwrap()
    }

    #[test]
    fn test_centroid_single_point() {
        let p = Coordinates::new(40.7128, -74.0060);
        let coords = CoordinateSet::new(vec![p]).unwrap();
        assert_eq!(centroid(&coords), p);
    }

    #[test]
    fn test_centroid_three_points() {
        let coords = set(&[(10.0, 20.0), (10.0, 20.2), (10.2, 20.0)]);
        let c = centroid(&coords);

        assert_abs_diff_eq!(c.lat, 10.0667, epsilon = 1e-4);
        assert_abs_diff_eq!(c.lng, 20.0667, epsilon = 1e-4);
    }

    #[test]
    fn test_weighted_average_favors_heavy_point() {
        let coords = set(&[(0.0, 0.0), (10.0, 10.0)]);
        let c = weighted_average(&coords, &[3.0, 1.0]);

        assert_abs_diff_eq!(c.lat, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.lng, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_weight_ignores_point() {
        let coords = set(&[(1.0, 2.0), (50.0, 60.0)]);
        let c = weighted_average(&coords, &[1.0, 0.0]);
        assert_eq!(c, Coordinates::new(1.0, 2.0));
    }

    #[test]
    fn test_weights_scale_invariant() {
        let coords = set(&[(1.0, 5.0), (2.0, 7.0), (4.0, -3.0)]);
        let a = weighted_average(&coords, &[1.0, 2.0, 3.0]);
        let b = weighted_average(&coords, &[10.0, 20.0, 30.0]);

        assert_abs_diff_eq!(a.lat, b.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(a.lng, b.lng, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "length must match")]
    fn test_length_mismatch_panics() {
        let coords = set(&[(1.0, 2.0), (3.0, 4.0)]);
        weighted_average(&coords, &[1.0]);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_sum_panics() {
        let coords = set(&[(1.0, 2.0), (3.0, 4.0)]);
        weighted_average(&coords, &[0.0, 0.0]);
    }
}
