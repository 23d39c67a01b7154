//! Core seam traits for the itinerary planner.
//!
//! These are intentionally minimal. The solver only needs distances and
//! travel-time estimates between coordinate pairs; concrete apps can plug
//! in a different travel model (e.g. a routing engine) without touching
//! the greedy heuristic.

use crate::model::Coordinate;

/// Provides distance and travel-time estimates between two points.
///
/// Implementations must be symmetric (swapping the endpoints should not
/// change the estimate) and return zero for identical points.
pub trait TravelEstimator {
    /// Distance between two points in kilometers.
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Estimated travel time between two points in whole minutes.
    fn travel_minutes(&self, from: Coordinate, to: Coordinate) -> i32;
}
