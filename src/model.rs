//! Data model for itinerary planning.
//!
//! [`Location`] is the caller-supplied input record; [`RouteStep`] and
//! [`Itinerary`] are the optimizer's derived output. Field names follow
//! the camelCase shape the surrounding applications exchange, so records
//! deserialize directly from their JSON.

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The single period of day a location is typically crowded.
///
/// Used only as a soft penalty during optimization, never a hard
/// constraint. Unrecognized values deserialize as [`BusyPeriod::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusyPeriod {
    Morning,
    Noon,
    Afternoon,
    Evening,
    #[default]
    #[serde(other)]
    None,
}

impl BusyPeriod {
    /// Congestion penalty score for this period.
    pub fn score(self) -> i32 {
        match self {
            Self::Morning => 3,
            Self::Noon => 4,
            Self::Afternoon => 3,
            Self::Evening => 2,
            Self::None => 1,
        }
    }

    /// The period of day containing a minutes-since-midnight value.
    ///
    /// Bands are whole-hour: morning [8:00, 11:00), noon [11:00, 14:00),
    /// afternoon [14:00, 17:00), evening [17:00, 20:00). Any other time
    /// of day is `None`.
    pub fn at_minute(minutes: i32) -> Self {
        match minutes.div_euclid(60) {
            8..=10 => Self::Morning,
            11..=13 => Self::Noon,
            14..=16 => Self::Afternoon,
            17..=19 => Self::Evening,
            _ => Self::None,
        }
    }

    /// Display label for this period.
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning (8AM-11AM)",
            Self::Noon => "Noon (11AM-2PM)",
            Self::Afternoon => "Afternoon (2PM-5PM)",
            Self::Evening => "Evening (5PM-8PM)",
            Self::None => "Not typically busy",
        }
    }
}

/// A point of interest to be scheduled into an itinerary.
///
/// `open_time` and `close_time` are 24-hour `HH:MM` strings; a location
/// open anytime is encoded as `00:00`-`23:59`. An empty `open_time` is
/// treated as midnight by the solver. Once parsed, opening must precede
/// closing within the same day (no overnight windows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Opaque unique identifier; the optimizer never interprets it.
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinate,
    pub open_time: String,
    pub close_time: String,
    /// Required visit length in minutes, > 0.
    pub visit_duration: i32,
    #[serde(default)]
    pub busy_period: BusyPeriod,
}

/// One visited location in a finished itinerary, with projected timing.
///
/// Times are minutes since midnight. Arrival is the visit start: when the
/// traveler would reach the location before it opens, arrival is clamped
/// to the opening time and the wait counts toward the itinerary total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub location: Location,
    pub arrival_minutes: i32,
    pub departure_minutes: i32,
    /// Zero for the first step.
    pub travel_minutes_from_previous: i32,
    /// Zero for the first step.
    pub distance_km_from_previous: f64,
}

/// The ordered, time-annotated output of the optimizer.
///
/// May contain fewer steps than were supplied: locations that could not
/// be reached before closing are silently left out. Callers wanting to
/// warn the user should compare `steps.len()` against their input length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub steps: Vec<RouteStep>,
    /// Sum of consecutive leg distances in kilometers.
    pub total_distance_km: f64,
    /// Wall-clock span from first arrival to last departure, including
    /// travel and waiting.
    pub total_duration_minutes: i32,
}

impl Itinerary {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}
