//! Random nearby-point sampling.
//!
//! Widens upstream coverage by scattering query points around the caller's
//! location: each point is a spherical destination at a uniformly random
//! bearing and a uniformly random distance within a fixed band.

use rand::Rng;

/// Mean earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Sample distances are drawn uniformly from `[MIN, MAX)` kilometers.
pub const MIN_SAMPLE_DISTANCE_KM: f64 = 1.0;
pub const MAX_SAMPLE_DISTANCE_KM: f64 = 2.5;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting values outside latitude [-90, 90] or
    /// longitude [-180, 180]. NaN fails both checks.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// Destination point at a random bearing in [-180°, 180°) and the given
/// great-circle distance from `center`.
#[must_use]
pub fn sample_point(center: Coordinate, distance_km: f64) -> Coordinate {
    let bearing_deg = rand::rng().random_range(-180.0..180.0);
    destination(center, distance_km, bearing_deg)
}

/// `count` independent samples around `center`, each at an independently
/// random distance within the sample band.
#[must_use]
pub fn generate_points(center: Coordinate, count: usize) -> Vec<Coordinate> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let distance_km = rng.random_range(MIN_SAMPLE_DISTANCE_KM..MAX_SAMPLE_DISTANCE_KM);
            sample_point(center, distance_km)
        })
        .collect()
}

/// Standard spherical destination-point formula.
fn destination(center: Coordinate, distance_km: f64, bearing_deg: f64) -> Coordinate {
    let lat1 = center.latitude.to_radians();
    let lon1 = center.longitude.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate {
        latitude: lat2.to_degrees(),
        longitude: wrap_longitude(lon2.to_degrees()),
    }
}

/// Normalizes a longitude into [-180, 180).
fn wrap_longitude(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}
