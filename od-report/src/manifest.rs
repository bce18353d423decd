//! Passenger manifest allocation.
//!
//! A manifest is the flat list of every booking sold on a service. Allocation
//! groups it by origin-destination and hands each group to the matching OD.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Booking, Od, Stop};

/// Outcome of allocating a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ManifestSummary {
    /// Bookings attached to an OD
    pub allocated: usize,
    /// Bookings whose origin-destination is not sold on the service
    pub unmatched: usize,
}

/// Allocate `bookings` across `ods`.
///
/// Every OD's bookings are replaced (not appended) by exactly the bookings
/// with the same origin and destination; an OD with no matching booking
/// ends up empty. Bookings matching no OD are dropped and counted in
/// [`ManifestSummary::unmatched`].
///
/// Runs in one pass over the bookings and one pass over the ODs.
pub fn allocate<I>(ods: &mut [Od], bookings: I) -> ManifestSummary
where
    I: IntoIterator<Item = Booking>,
{
    let mut groups: HashMap<(Stop, Stop), Vec<Booking>> = HashMap::new();
    for booking in bookings {
        let key = (booking.origin().clone(), booking.destination().clone());
        groups.entry(key).or_default().push(booking);
    }

    let mut allocated = 0;
    for od in ods.iter_mut() {
        let key = (od.origin().clone(), od.destination().clone());
        let group = groups.remove(&key).unwrap_or_default();
        allocated += group.len();
        od.replace_bookings(group);
    }

    let unmatched: usize = groups.values().map(Vec::len).sum();
    if unmatched > 0 {
        warn!(unmatched, "Dropped bookings with no matching OD");
        for ((origin, destination), group) in &groups {
            debug!(%origin, %destination, count = group.len(), "Unmatched OD");
        }
    }

    ManifestSummary {
        allocated,
        unmatched,
    }
}
