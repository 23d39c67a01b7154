//! Greedy itinerary solver.
//!
//! Picks a visiting order for a set of locations one step at a time:
//! seed with the earliest-opening location, then repeatedly move to the
//! unvisited location with the lowest combined cost of travel time,
//! waiting for opening, and expected congestion on arrival. A candidate
//! that cannot be reached before it closes is skipped; when none can,
//! the route ends early and the rest are left out. This is a documented
//! heuristic with no backtracking, not a shortest-route solver.

use tracing::debug;

use crate::geo::HaversineEstimator;
use crate::model::{BusyPeriod, Itinerary, Location, RouteStep};
use crate::time::{self, InvalidTimeFormat};
use crate::traits::TravelEstimator;

/// Weight applied to the busyness score when ranking candidates.
///
/// One busy-score unit costs about as much as 30 minutes of travel or
/// waiting, so congestion avoidance competes with, but does not always
/// beat, proximity.
const BUSYNESS_WEIGHT: i32 = 30;

/// A location plus the minute fields derived for scheduling.
///
/// Working copy local to one solver call; caller-held records are never
/// touched.
#[derive(Debug, Clone)]
struct Candidate<'a> {
    location: &'a Location,
    open_min: i32,
    close_min: i32,
    busy_score: i32,
}

/// Orders `locations` into an itinerary using great-circle travel
/// estimates at the default assumed speed.
///
/// Zero locations yield an empty itinerary. Locations that cannot be
/// reached before closing are left out, so the result may hold fewer
/// steps than were supplied (see [`Itinerary`]). Fails only when a time
/// string is not valid 24-hour `HH:MM`.
pub fn optimize_route(locations: &[Location]) -> Result<Itinerary, InvalidTimeFormat> {
    optimize_route_with(locations, &HaversineEstimator::default())
}

/// Like [`optimize_route`], with a caller-supplied travel model.
pub fn optimize_route_with<E: TravelEstimator>(
    locations: &[Location],
    estimator: &E,
) -> Result<Itinerary, InvalidTimeFormat> {
    if locations.is_empty() {
        return Ok(Itinerary::default());
    }

    let mut remaining = derive_candidates(locations)?;

    // Stable sort keeps input order between equal opening times, which in
    // turn keeps the whole pass deterministic.
    remaining.sort_by_key(|candidate| candidate.open_min);

    let seed = remaining.remove(0);
    debug!(
        id = %seed.location.id,
        open_min = seed.open_min,
        "seeded route with earliest-opening location"
    );

    let mut current_time = seed.open_min + seed.location.visit_duration;
    let mut current_coord = seed.location.coordinates;
    let mut route = vec![seed];

    while !remaining.is_empty() {
        let mut best: Option<(usize, i32, i32)> = None;

        for (index, candidate) in remaining.iter().enumerate() {
            let travel = estimator.travel_minutes(current_coord, candidate.location.coordinates);
            let arrival = current_time + travel;

            // Would arrive at or after closing: infeasible this round.
            if arrival >= candidate.close_min {
                continue;
            }

            let wait = (candidate.open_min - arrival).max(0);
            let busyness = busyness_at(candidate, arrival);
            let cost = travel + wait + busyness * BUSYNESS_WEIGHT;

            // Strict inequality: the first-encountered candidate wins ties.
            if best.is_none_or(|(_, best_cost, _)| cost < best_cost) {
                best = Some((index, cost, travel));
            }
        }

        let Some((index, cost, travel)) = best else {
            debug!(
                left_out = remaining.len(),
                "no remaining location reachable before closing; itinerary is partial"
            );
            break;
        };

        let chosen = remaining.remove(index);
        debug!(id = %chosen.location.id, cost, travel, "appended next location");

        // Wait until opening if the leg gets us there early.
        current_time = (current_time + travel).max(chosen.open_min) + chosen.location.visit_duration;
        current_coord = chosen.location.coordinates;
        route.push(chosen);
    }

    Ok(build_itinerary(&route, estimator))
}

fn derive_candidates(locations: &[Location]) -> Result<Vec<Candidate<'_>>, InvalidTimeFormat> {
    locations
        .iter()
        .map(|location| {
            Ok(Candidate {
                location,
                open_min: time::time_to_minutes_or_midnight(&location.open_time)?,
                close_min: time::time_to_minutes_or_midnight(&location.close_time)?,
                busy_score: location.busy_period.score(),
            })
        })
        .collect()
}

/// Busy score when the arrival time falls inside the location's declared
/// busy period, baseline 1 otherwise.
fn busyness_at(candidate: &Candidate<'_>, minutes: i32) -> i32 {
    let period = candidate.location.busy_period;
    if period != BusyPeriod::None && BusyPeriod::at_minute(minutes) == period {
        candidate.busy_score
    } else {
        1
    }
}

/// Re-walks the finalized order to produce the timing trace and totals.
fn build_itinerary<E: TravelEstimator>(route: &[Candidate<'_>], estimator: &E) -> Itinerary {
    let mut steps: Vec<RouteStep> = Vec::with_capacity(route.len());
    let mut total_distance = 0.0;
    let mut current_time = 0;
    let mut previous: Option<&Candidate<'_>> = None;

    for candidate in route {
        let (travel, distance) = match previous {
            Some(prev) => (
                estimator.travel_minutes(prev.location.coordinates, candidate.location.coordinates),
                estimator.distance_km(prev.location.coordinates, candidate.location.coordinates),
            ),
            None => (0, 0.0),
        };

        let arrival = match previous {
            // The day starts when the first location opens.
            None => candidate.open_min,
            Some(_) => (current_time + travel).max(candidate.open_min),
        };
        let departure = arrival + candidate.location.visit_duration;

        total_distance += distance;
        steps.push(RouteStep {
            location: candidate.location.clone(),
            arrival_minutes: arrival,
            departure_minutes: departure,
            travel_minutes_from_previous: travel,
            distance_km_from_previous: distance,
        });

        current_time = departure;
        previous = Some(candidate);
    }

    let total_duration = match (steps.first(), steps.last()) {
        (Some(first), Some(last)) => last.departure_minutes - first.arrival_minutes,
        _ => 0,
    };

    Itinerary {
        steps,
        total_distance_km: total_distance,
        total_duration_minutes: total_duration,
    }
}
