//! Great-circle travel estimation.
//!
//! Uses straight-line (haversine) distance and a fixed assumed city
//! driving speed. Less accurate than a routing engine (ignores roads)
//! but always available and fully deterministic.

use crate::model::Coordinate;
use crate::traits::TravelEstimator;

/// Average city driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two points in kilometers.
///
/// Symmetric, and zero for identical points.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based travel estimator.
///
/// Travel time is distance over an assumed average speed, rounded up to
/// whole minutes. Stands in for a real routing-engine call.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineEstimator {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Convert distance in km to travel time in whole minutes.
    fn km_to_minutes(&self, km: f64) -> i32 {
        let hours = km / self.speed_kmh;
        (hours * 60.0).ceil() as i32
    }
}

impl TravelEstimator for HaversineEstimator {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_km(from, to)
    }

    fn travel_minutes(&self, from: Coordinate, to: Coordinate) -> i32 {
        self.km_to_minutes(haversine_km(from, to))
    }
}
