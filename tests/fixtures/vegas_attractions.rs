//! Real Las Vegas attractions for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Opening hours and visit
//! durations are representative, not live data.

use itinerary_planner::model::{BusyPeriod, Coordinate, Location};

/// A named attraction with a daily schedule.
#[derive(Debug, Clone)]
pub struct Attraction {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub open: &'static str,
    pub close: &'static str,
    pub visit_minutes: i32,
    pub busy: BusyPeriod,
}

impl Attraction {
    pub const fn new(
        name: &'static str,
        lat: f64,
        lng: f64,
        open: &'static str,
        close: &'static str,
        visit_minutes: i32,
        busy: BusyPeriod,
    ) -> Self {
        Self {
            name,
            lat,
            lng,
            open,
            close,
            visit_minutes,
            busy,
        }
    }
}

pub const ATTRACTIONS: &[Attraction] = &[
    Attraction::new(
        "Bellagio Conservatory",
        36.1126,
        -115.1767,
        "00:00",
        "23:59",
        45,
        BusyPeriod::Evening,
    ),
    Attraction::new(
        "Welcome to Las Vegas Sign",
        36.0820,
        -115.1728,
        "00:00",
        "23:59",
        20,
        BusyPeriod::None,
    ),
    Attraction::new(
        "Neon Museum",
        36.1770,
        -115.1355,
        "09:00",
        "17:00",
        60,
        BusyPeriod::Afternoon,
    ),
    Attraction::new(
        "Mob Museum",
        36.1729,
        -115.1413,
        "09:00",
        "21:00",
        90,
        BusyPeriod::Noon,
    ),
    Attraction::new(
        "Shark Reef Aquarium",
        36.0905,
        -115.1765,
        "10:00",
        "18:00",
        75,
        BusyPeriod::Afternoon,
    ),
    Attraction::new(
        "High Roller",
        36.1173,
        -115.1687,
        "11:30",
        "22:00",
        40,
        BusyPeriod::Evening,
    ),
    Attraction::new(
        "Fremont Street Experience",
        36.1699,
        -115.1446,
        "00:00",
        "23:59",
        60,
        BusyPeriod::Evening,
    ),
];

/// Builds solver-ready location records from the attraction list.
pub fn locations() -> Vec<Location> {
    ATTRACTIONS
        .iter()
        .enumerate()
        .map(|(index, attraction)| Location {
            id: format!("poi-{index}"),
            name: attraction.name.to_string(),
            address: format!("{}, Las Vegas, NV", attraction.name),
            coordinates: Coordinate::new(attraction.lat, attraction.lng),
            open_time: attraction.open.to_string(),
            close_time: attraction.close.to_string(),
            visit_duration: attraction.visit_minutes,
            busy_period: attraction.busy,
        })
        .collect()
}
