//! Seat occupancy per segment.
//!
//! A booking occupies a seat on every segment its OD travels over: on an
//! A-B-C service, a booking from A to C is on board both A-B and B-C.

use crate::domain::{Booking, Od, Segment};
use crate::itinerary::{Itinerary, ItineraryError};

/// Number of passengers on board one segment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LegLoad {
    pub segment: Segment,
    pub passengers: usize,
}

/// Bookings occupying `segment`.
///
/// Collects the bookings of every OD whose legs include `segment`. The
/// result is not de-duplicated: a booking reachable through two ODs would
/// appear twice, which cannot happen when each booking belongs to one OD.
///
/// # Errors
///
/// Returns `Err` if an OD does not fit on the itinerary.
pub fn occupants<'a>(
    itinerary: &Itinerary,
    ods: &'a [Od],
    segment: &Segment,
) -> Result<Vec<&'a Booking>, ItineraryError> {
    let mut on_board = Vec::new();
    for od in ods {
        let legs = itinerary.legs_of(od.origin(), od.destination())?;
        if legs.contains(segment) {
            on_board.extend(od.bookings());
        }
    }
    Ok(on_board)
}

/// Passenger count on every segment, in travel order.
pub fn leg_loads(itinerary: &Itinerary, ods: &[Od]) -> Result<Vec<LegLoad>, ItineraryError> {
    itinerary
        .segments()
        .iter()
        .map(|segment| -> Result<LegLoad, ItineraryError> {
            Ok(LegLoad {
                segment: segment.clone(),
                passengers: occupants(itinerary, ods, segment)?.len(),
            })
        })
        .collect()
}
