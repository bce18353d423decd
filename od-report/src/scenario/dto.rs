//! Serialised scenario file format.
//!
//! ```json
//! {
//!   "service": "7601",
//!   "departs_in_days": 7,
//!   "itinerary": ["ply", "lpd", "msc"],
//!   "bookings": [{"origin": "ply", "destination": "lpd", "sale_day_x": -30, "price": 20}],
//!   "pricing": [{"price": 20, "seats": 2}],
//!   "demand": [{"day_x": -7, "tiers": [{"price": 20, "bookings": 1}]}]
//! }
//! ```
//!
//! Exactly one of `departure_date` (YYYY-MM-DD) and `departs_in_days`
//! (relative to the report date) must be given.

use chrono::NaiveDate;
use serde::Deserialize;

/// A whole scenario file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    /// Service identifier
    pub service: String,

    /// Absolute departure date
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,

    /// Departure date as days after the report date
    #[serde(default)]
    pub departs_in_days: Option<i64>,

    /// Stop names in calling order
    pub itinerary: Vec<String>,

    /// Passenger manifest
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,

    /// Seats available per price tier
    #[serde(default)]
    pub pricing: Vec<TierRecord>,

    /// Expected bookings per day-x and price tier
    #[serde(default)]
    pub demand: Vec<DemandDay>,
}

/// One booking of the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingRecord {
    pub origin: String,
    pub destination: String,
    pub sale_day_x: i32,
    pub price: f64,
}

/// Seat allotment of one price tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierRecord {
    pub price: f64,
    pub seats: u32,
}

/// Expected demand on one day.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemandDay {
    pub day_x: i32,
    pub tiers: Vec<DemandTier>,
}

/// Expected bookings at one price tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemandTier {
    pub price: f64,
    pub bookings: u32,
}
