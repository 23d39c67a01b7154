//! End-to-end smoke test over the default haversine travel model.

use itinerary_planner::model::{BusyPeriod, Coordinate, Location};
use itinerary_planner::solver::optimize_route;

fn location(id: &str, lat: f64, lng: f64, open: &str, close: &str) -> Location {
    Location {
        id: id.to_string(),
        name: id.to_string(),
        address: format!("{id} address"),
        coordinates: Coordinate::new(lat, lng),
        open_time: open.to_string(),
        close_time: close.to_string(),
        visit_duration: 45,
        busy_period: BusyPeriod::None,
    }
}

#[test]
fn plans_a_three_stop_day() {
    let locations = vec![
        location("museum", 36.1699, -115.1398, "09:00", "17:00"),
        location("park", 36.1162, -115.1745, "08:00", "20:00"),
        location("market", 36.1023, -115.1688, "10:00", "18:00"),
    ];

    let itinerary = optimize_route(&locations).unwrap();

    assert_eq!(itinerary.len(), 3);
    assert!(itinerary.total_distance_km > 0.0);
    assert!(itinerary.total_duration_minutes > 0);

    // Timing is internally consistent: each visit lasts its duration and
    // the schedule never runs backwards.
    for pair in itinerary.steps.windows(2) {
        assert!(pair[1].arrival_minutes >= pair[0].departure_minutes);
    }
    for step in &itinerary.steps {
        assert_eq!(
            step.departure_minutes - step.arrival_minutes,
            step.location.visit_duration
        );
    }

    // Earliest-opening location seeds the route.
    assert_eq!(itinerary.steps[0].location.id, "park");
    assert_eq!(itinerary.steps[0].arrival_minutes, 8 * 60);
}
