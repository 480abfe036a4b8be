//! Geographic coordinates
//!
//! This module handles:
//! - The `Coordinates` value type and non-empty `CoordinateSet`
//! - Great-circle distance (haversine)
//! - Parsing free-form coordinate text

pub mod distance;
pub mod parse;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate (latitude, longitude) in degrees
///
/// Ranges are not enforced: latitude is expected in [-90, 90] and longitude
/// is taken as-is, without wrapping at the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Formats as `lat, lng`, which parses back to the same pair
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(parse::parse_line(s.trim(), 1)?)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// An ordered, non-empty sequence of finite coordinates
///
/// Order follows the input so results can be traced back to input lines;
/// none of the solvers depend on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoordinateSet(Vec<Coordinates>);

impl CoordinateSet {
    /// Build a set from already-structured coordinates
    ///
    /// Fails with `Error::EmptyInput` for an empty list and
    /// `Error::InvalidCoordinates` if any pair is not finite.
    pub fn new(coords: Vec<Coordinates>) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Some((i, bad)) = coords.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(Error::InvalidCoordinates(format!(
                "point {} ({}, {}) is not a finite pair",
                i + 1,
                bad.lat,
                bad.lng
            )));
        }
        Ok(Self(coords))
    }

    /// Number of points (always at least one)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the points in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinates> {
        self.0.iter()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[Coordinates] {
        &self.0
    }

    /// Take ownership of the underlying points
    pub fn into_inner(self) -> Vec<Coordinates> {
        self.0
    }
}

impl TryFrom<Vec<Coordinates>> for CoordinateSet {
    type Error = Error;

    fn try_from(coords: Vec<Coordinates>) -> Result<Self> {
        Self::new(coords)
    }
}

impl<'de> Deserialize<'de> for CoordinateSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coords = Vec::<Coordinates>::deserialize(deserializer)?;
        Self::new(coords).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a Coordinates;
    type IntoIter = std::slice::Iter<'a, Coordinates>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_set_rejects_empty() {
        let result = CoordinateSet::new(vec![]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_coordinate_set_rejects_non_finite() {
        let result = CoordinateSet::new(vec![
            Coordinates::new(1.0, 2.0),
            Coordinates::new(f64::NAN, 2.0),
        ]);
        match result {
            Err(Error::InvalidCoordinates(msg)) => assert!(msg.contains("point 2")),
            other => panic!("expected InvalidCoordinates, got {:?}", other),
        }

        let result = CoordinateSet::new(vec![Coordinates::new(1.0, f64::INFINITY)]);
        assert!(matches!(result, Err(Error::InvalidCoordinates(_))));
    }

    #[test]
    fn test_coordinate_set_preserves_order() {
        let points = vec![
            Coordinates::new(3.0, 4.0),
            Coordinates::new(1.0, 2.0),
            Coordinates::new(5.0, 6.0),
        ];
        let set = CoordinateSet::new(points.clone()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.as_slice(), points.as_slice());
        assert_eq!(set.into_inner(), points);
    }

    #[test]
    fn test_display_format() {
        let c = Coordinates::new(40.7128, -74.006);
        assert_eq!(c.to_string(), "40.7128, -74.006");
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let samples = [
            Coordinates::new(40.7128, -74.0060),
            Coordinates::new(-33.868820, 151.209290),
            Coordinates::new(0.1 + 0.2, 1.0 / 3.0),
            Coordinates::new(-0.0, 179.99999999),
        ];
        for c in samples {
            let parsed: Coordinates = c.to_string().parse().unwrap();
            assert_eq!(parsed, c);
        }
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("not a point".parse::<Coordinates>().is_err());
    }

    #[test]
    fn test_deserialize_rejects_empty_set() {
        let result: std::result::Result<CoordinateSet, _> = serde_json::from_str("[]");
        assert!(result.is_err());

        let set: CoordinateSet =
            serde_json::from_str(r#"[{"lat": 1.0, "lng": 2.0}]"#).unwrap();
        assert_eq!(set.as_slice(), &[Coordinates::new(1.0, 2.0)]);
    }
}
