//! Service type.
//!
//! A `Service` is one scheduled run (e.g. train 7601 on a given date)
//! carrying passengers between two or more stops. It owns its segments and
//! the origin-destination pairs it sells, and resolves its itinerary from
//! the segments on demand.

use std::cell::OnceCell;

use chrono::NaiveDate;

use super::{Booking, Od, Segment, ServiceId, Stop};
use crate::itinerary::{self, Itinerary, ItineraryError};
use crate::manifest::{self, ManifestSummary};
use crate::occupancy::{self, LegLoad};
use crate::report::{DemandMatrix, OdReport, Pricing, ServiceReport};

/// A service and everything sold on it.
///
/// The resolved itinerary is memoised and reset whenever a segment is added,
/// so repeated reads without new segments return the same itinerary.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use od_report::domain::{Service, ServiceId, Stop};
///
/// let ply = Stop::new("ply").unwrap();
/// let lpd = Stop::new("lpd").unwrap();
/// let msc = Stop::new("msc").unwrap();
///
/// let mut service = Service::new(
///     ServiceId::new("7601").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 22).unwrap(),
/// );
/// service.load_itinerary(&[ply.clone(), lpd.clone(), msc.clone()]).unwrap();
///
/// assert_eq!(service.segments().len(), 2);
/// assert_eq!(service.ods().len(), 3);
/// assert_eq!(service.itinerary().unwrap().stops(), &[ply, lpd, msc]);
/// ```
#[derive(Debug, Clone)]
pub struct Service {
    id: ServiceId,
    departure_date: NaiveDate,
    segments: Vec<Segment>,
    ods: Vec<Od>,
    manifest: ManifestSummary,
    itinerary: OnceCell<Result<Itinerary, ItineraryError>>,
}

impl Service {
    /// Creates a service with no segments and no ODs.
    pub fn new(id: ServiceId, departure_date: NaiveDate) -> Self {
        Self {
            id,
            departure_date,
            segments: Vec::new(),
            ods: Vec::new(),
            manifest: ManifestSummary::default(),
            itinerary: OnceCell::new(),
        }
    }

    /// Returns the service identifier.
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the departure date.
    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Day-x of `today` relative to departure.
    ///
    /// Negative before departure, 0 on departure day.
    pub fn day_x(&self, today: NaiveDate) -> i64 {
        today.signed_duration_since(self.departure_date).num_days()
    }

    /// Returns the segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the ODs sold on this service.
    pub fn ods(&self) -> &[Od] {
        &self.ods
    }

    /// Outcome of the last manifest allocation.
    pub fn manifest(&self) -> ManifestSummary {
        self.manifest
    }

    /// Returns the OD from `origin` to `destination`, if sold.
    pub fn od(&self, origin: &Stop, destination: &Stop) -> Option<&Od> {
        self.ods.iter().find(|od| od.is_between(origin, destination))
    }

    /// Adds a segment from `origin` to `destination`.
    ///
    /// Returns false (and changes nothing) if the segment is already known.
    /// Otherwise the memoised itinerary is reset.
    pub fn add_segment(&mut self, origin: Stop, destination: Stop) -> bool {
        let segment = Segment::new(self.id.clone(), origin, destination);
        if self.segments.contains(&segment) {
            return false;
        }
        self.segments.push(segment);
        self.itinerary.take();
        true
    }

    /// Adds an OD from `origin` to `destination`.
    ///
    /// Returns false if the OD is already sold.
    pub fn add_od(&mut self, origin: Stop, destination: Stop) -> bool {
        if self.od(&origin, &destination).is_some() {
            return false;
        }
        self.ods.push(Od::new(self.id.clone(), origin, destination));
        true
    }

    /// Replace segments and ODs with those of the given stop order.
    ///
    /// Creates one segment per pair of consecutive stops and one OD per
    /// pair of stops with the origin before the destination. Previously
    /// allocated bookings are discarded along with the old ODs.
    ///
    /// # Errors
    ///
    /// Returns `Err`, leaving the service unchanged, if the stops do not form
    /// a simple path (a stop listed twice).
    pub fn load_itinerary(&mut self, stops: &[Stop]) -> Result<(), ItineraryError> {
        let segments: Vec<Segment> = stops
            .windows(2)
            .map(|pair| Segment::new(self.id.clone(), pair[0].clone(), pair[1].clone()))
            .collect();
        let resolved = itinerary::resolve(&segments)?;

        self.ods = itinerary::od_pairs(stops)
            .map(|(origin, destination)| {
                Od::new(self.id.clone(), origin.clone(), destination.clone())
            })
            .collect();
        self.segments = segments;
        self.manifest = ManifestSummary::default();
        self.itinerary = OnceCell::from(Ok(resolved));
        Ok(())
    }

    /// Allocate a passenger manifest across this service's ODs.
    ///
    /// See [`manifest::allocate`].
    pub fn load_passenger_manifest<I>(&mut self, bookings: I) -> ManifestSummary
    where
        I: IntoIterator<Item = Booking>,
    {
        self.manifest = manifest::allocate(&mut self.ods, bookings);
        self.manifest
    }

    /// The resolved itinerary, computed on first use after a segment change.
    pub fn itinerary(&self) -> Result<&Itinerary, ItineraryError> {
        self.itinerary
            .get_or_init(|| itinerary::resolve(&self.segments))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Segments travelled by `od`, in order.
    pub fn legs(&self, od: &Od) -> Result<&[Segment], ItineraryError> {
        self.itinerary()?.legs_of(od.origin(), od.destination())
    }

    /// Bookings on board `segment`.
    pub fn occupants(&self, segment: &Segment) -> Result<Vec<&Booking>, ItineraryError> {
        occupancy::occupants(self.itinerary()?, &self.ods, segment)
    }

    /// Passenger count on every segment, in travel order.
    pub fn leg_loads(&self) -> Result<Vec<LegLoad>, ItineraryError> {
        occupancy::leg_loads(self.itinerary()?, &self.ods)
    }

    /// Build the full report: itinerary, loads, and per-OD history and
    /// forecast under the same `pricing` and `demand`.
    pub fn report(
        &self,
        today: NaiveDate,
        pricing: &Pricing,
        demand: &DemandMatrix,
    ) -> Result<ServiceReport, ItineraryError> {
        let itinerary = self.itinerary()?;
        let ods = self
            .ods
            .iter()
            .map(|od| -> Result<OdReport, ItineraryError> {
                Ok(OdReport {
                    origin: od.origin().clone(),
                    destination: od.destination().clone(),
                    legs: self.legs(od)?.to_vec(),
                    bookings: od.bookings().len(),
                    history: od.history(),
                    forecast: od.forecast(pricing, demand),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ServiceReport {
            service: self.id.clone(),
            departure_date: self.departure_date,
            day_x: self.day_x(today),
            itinerary: itinerary.stops().to_vec(),
            leg_loads: self.leg_loads()?,
            manifest: self.manifest,
            ods,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// N distinct stops give N - 1 segments and N (N - 1) / 2 ODs
        #[test]
        fn segment_and_od_counts(n in 1usize..25) {
            let stops: Vec<Stop> = (0..n).map(|i| Stop::new(&format!("S{i}")).unwrap()).collect();
            let mut service = Service::new(
                ServiceId::new("P1").unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            );
            service.load_itinerary(&stops).unwrap();

            prop_assert_eq!(service.segments().len(), n - 1);
            prop_assert_eq!(service.ods().len(), n * (n - 1) / 2);
            if n > 1 {
                prop_assert_eq!(service.itinerary().unwrap().stops(), stops.as_slice());
            }
        }
    }
}
