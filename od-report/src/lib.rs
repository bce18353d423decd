//! Bookings report for a single transportation service.
//!
//! Reconstructs a service's itinerary from its segments, derives the
//! origin-destination (OD) pairs it sells, allocates a passenger manifest
//! to them, and produces per OD a history curve of bookings and revenue
//! and a forecast under a pricing and demand scenario.

pub mod config;
pub mod domain;
pub mod itinerary;
pub mod logging;
pub mod manifest;
pub mod occupancy;
pub mod report;
pub mod scenario;
