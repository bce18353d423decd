//! Report structures for a whole service.

use chrono::NaiveDate;
use serde::Serialize;

use super::DataPoint;
use crate::domain::{Segment, ServiceId, Stop};
use crate::manifest::ManifestSummary;
use crate::occupancy::LegLoad;

/// History and forecast curves of one OD.
#[derive(Debug, Clone, Serialize)]
pub struct OdReport {
    pub origin: Stop,
    pub destination: Stop,

    /// Segments travelled, in order
    pub legs: Vec<Segment>,

    /// Bookings sold so far
    pub bookings: usize,

    pub history: Vec<DataPoint>,

    /// Forecast continuing from `history`
    pub forecast: Vec<DataPoint>,
}

/// Report for one service, as of a given day.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceReport {
    pub service: ServiceId,
    pub departure_date: NaiveDate,

    /// Day-x of the report date
    pub day_x: i64,

    /// Stops in calling order
    pub itinerary: Vec<Stop>,

    /// Passengers on board each segment
    pub leg_loads: Vec<LegLoad>,

    /// Outcome of the manifest allocation
    pub manifest: ManifestSummary,

    pub ods: Vec<OdReport>,
}
