//! Test fixtures for itinerary-planner.
//!
//! Provides realistic test data: real Las Vegas attractions with
//! opening hours, visit durations, and busy periods.

pub mod vegas_attractions;
