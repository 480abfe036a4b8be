//! Great-circle distance
//!
//! Haversine distance on a sphere of radius `EARTH_RADIUS_METERS`.

use crate::constants::geo::EARTH_RADIUS_METERS;
use crate::coord::Coordinates;

/// Calculate the distance between two points in meters (Haversine formula)
///
/// # Arguments
/// * `p1` - First point
/// * `p2` - Second point
///
/// # Returns
/// Distance in meters. Identical points give exactly 0; non-finite input
/// yields NaN.
pub fn haversine_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let delta_lat = (p2.lat - p1.lat).to_radians();
    let delta_lng = (p2.lng - p1.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);

    // Rounding can push `a` past 1 for near-antipodal points; clamp keeps NaN
    2.0 * EARTH_RADIUS_METERS * a.sqrt().clamp(0.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_point(rng: &mut StdRng) -> Coordinates {
        Coordinates::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
    }

    #[test]
    fn test_haversine_distance() {
        // NYC to nearby point (about 1 degree = ~111km)
        let nyc = Coordinates::new(40.7128, -74.0060);
        let nearby = Coordinates::new(41.7128, -74.0060);

        let distance = haversine_distance(nyc, nearby);

        assert!(
            (distance - 111_195.0).abs() < 10.0,
            "Distance {} should be approximately 111195",
            distance
        );
    }

    #[test]
    fn test_known_city_pair() {
        // London to Paris, ~343.5 km
        let london = Coordinates::new(51.5074, -0.1278);
        let paris = Coordinates::new(48.8566, 2.3522);

        let distance = haversine_distance(london, paris);
        assert!(
            (distance - 343_500.0).abs() < 1_000.0,
            "London-Paris distance {} should be approximately 343.5 km",
            distance
        );
    }

    #[test]
    fn test_same_point_is_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = random_point(&mut rng);
            assert_eq!(haversine_distance(p, p), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            assert_relative_eq!(
                haversine_distance(a, b),
                haversine_distance(b, a),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            let c = random_point(&mut rng);

            let ab = haversine_distance(a, b);
            let bc = haversine_distance(b, c);
            let ac = haversine_distance(a, c);

            assert!(
                ac <= ab + bc + 1e-6,
                "triangle inequality violated: {} > {} + {}",
                ac,
                ab,
                bc
            );
        }
    }

    #[test]
    fn test_antipodal_points() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);

        let distance = haversine_distance(a, b);
        assert!(distance.is_finite());
        assert_relative_eq!(
            distance,
            std::f64::consts::PI * EARTH_RADIUS_METERS,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_non_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            assert!(haversine_distance(a, b) >= 0.0);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let a = Coordinates::new(f64::NAN, 0.0);
        let b = Coordinates::new(1.0, 1.0);
        assert!(haversine_distance(a, b).is_nan());
    }
}
