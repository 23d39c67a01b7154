//! itinerary-planner core
//!
//! A greedy day-itinerary optimizer over points of interest with opening
//! hours, visit durations, and busy-period penalties.

pub mod traits;
pub mod model;
pub mod time;
pub mod geo;
pub mod solver;
