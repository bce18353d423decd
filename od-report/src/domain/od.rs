//! Origin-destination (OD) type.
//!
//! An `Od` is a fare product between two stops of a service, bought by a
//! passenger. A service whose itinerary is A-B-C-D sells up to six ODs:
//! A-B, A-C, A-D, B-C, B-D and C-D.

use std::fmt;

use super::{Booking, ServiceId, Stop};
use crate::report::{self, DataPoint, DemandMatrix, Pricing, Totals};

/// An origin-destination pair of a service, with the bookings sold on it.
#[derive(Clone)]
pub struct Od {
    service: ServiceId,
    origin: Stop,
    destination: Stop,
    bookings: Vec<Booking>,
}

impl Od {
    /// Creates an OD with no bookings.
    pub fn new(service: ServiceId, origin: Stop, destination: Stop) -> Self {
        Self {
            service,
            origin,
            destination,
            bookings: Vec::new(),
        }
    }

    /// Returns the service this OD is sold on.
    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    /// Returns the boarding stop.
    pub fn origin(&self) -> &Stop {
        &self.origin
    }

    /// Returns the alighting stop.
    pub fn destination(&self) -> &Stop {
        &self.destination
    }

    /// Returns the bookings allocated to this OD.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns true if this OD travels from `origin` to `destination`.
    pub fn is_between(&self, origin: &Stop, destination: &Stop) -> bool {
        &self.origin == origin && &self.destination == destination
    }

    /// Replaces the bookings of this OD.
    pub(crate) fn replace_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
    }

    /// Cumulative bookings and revenue per sale day.
    ///
    /// See [`report::history`].
    pub fn history(&self) -> Vec<DataPoint> {
        report::history(&self.bookings)
    }

    /// Bookings and revenue sold so far on this OD.
    pub fn totals(&self) -> Totals {
        Totals::of(&self.bookings)
    }

    /// Forecast of cumulative bookings and revenue per day-x.
    ///
    /// The curve continues from the bookings already sold on this OD, so the
    /// first row adds the first forecast day's sales to [`Od::totals`].
    /// `pricing` and `demand` are not modified.
    pub fn forecast(&self, pricing: &Pricing, demand: &DemandMatrix) -> Vec<DataPoint> {
        report::forecast(pricing, demand, self.totals())
    }
}

impl fmt::Debug for Od {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Od")
            .field("service", &self.service)
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("bookings", &self.bookings.len())
            .finish()
    }
}

impl fmt::Display for Od {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}
