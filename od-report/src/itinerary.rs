//! Itinerary reconstruction and OD leg resolution.
//!
//! A service stores its segments as an unordered collection. [`resolve`]
//! rebuilds the single linear path they describe, and
//! [`Itinerary::legs_of`] answers which contiguous run of segments an
//! origin-destination pair travels over.
//!
//! The segments of a service are expected to form exactly one simple path.
//! Anything else (branching, cycles, disconnected pieces) is reported as an
//! [`ItineraryError`] rather than producing a partial itinerary.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Segment, Stop};

/// Errors raised when segments do not describe a single linear itinerary,
/// or when an OD does not fit on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// Two segments leave from, or arrive at, the same stop
    #[error("inconsistent itinerary: branching at stop {stop}")]
    Branching { stop: Stop },

    /// There is not exactly one segment without a predecessor
    #[error("inconsistent itinerary: expected one starting segment, found {candidates}")]
    NoUniqueStart { candidates: usize },

    /// Walking from the start did not visit every segment
    #[error("inconsistent itinerary: path covers {visited} of {total} segments")]
    Disconnected { visited: usize, total: usize },

    /// The stop is not served by this itinerary
    #[error("stop {0} is not on the itinerary")]
    UnknownStop(Stop),

    /// The destination does not come after the origin
    #[error("destination {destination} is not reached from origin {origin}")]
    DestinationNotReached { origin: Stop, destination: Stop },
}

/// The resolved, ordered itinerary of a service.
///
/// # Invariants
///
/// - `segments[i].destination() == segments[i + 1].origin()`
/// - `stops.len() == segments.len() + 1`, or both are empty
/// - `stops[i]` and `stops[i + 1]` are the endpoints of `segments[i]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    stops: Vec<Stop>,
    segments: Vec<Segment>,
}

impl Itinerary {
    /// Returns the stops in calling order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if the itinerary has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the position of `stop` in calling order.
    pub fn position(&self, stop: &Stop) -> Option<usize> {
        self.stops.iter().position(|s| s == stop)
    }

    /// Returns the segments travelled from `origin` to `destination`.
    ///
    /// The result is a contiguous, non-empty run starting with the segment
    /// leaving `origin` and ending with the segment arriving at `destination`.
    ///
    /// # Errors
    ///
    /// - [`ItineraryError::UnknownStop`] if either stop is not on the itinerary
    /// - [`ItineraryError::DestinationNotReached`] if `destination` does not
    ///   come after `origin`
    pub fn legs_of(&self, origin: &Stop, destination: &Stop) -> Result<&[Segment], ItineraryError> {
        for stop in [origin, destination] {
            if self.position(stop).is_none() {
                return Err(ItineraryError::UnknownStop(stop.clone()));
            }
        }

        let not_reached = || ItineraryError::DestinationNotReached {
            origin: origin.clone(),
            destination: destination.clone(),
        };

        let outbound = self
            .segments
            .iter()
            .position(|s| s.origin() == origin)
            .ok_or_else(not_reached)?;
        let last = self.segments[outbound..]
            .iter()
            .position(|s| s.destination() == destination)
            .map(|offset| outbound + offset)
            .ok_or_else(not_reached)?;

        Ok(&self.segments[outbound..=last])
    }
}

/// Rebuild the linear itinerary described by an unordered set of segments.
///
/// Each segment is linked to the segment leaving its destination. The first
/// segment is the only one that is nobody's successor; the walk from there
/// emits each segment's origin, then the destination of the last segment.
///
/// An empty input resolves to an empty itinerary.
///
/// # Examples
///
/// ```
/// use od_report::domain::{Segment, ServiceId, Stop};
/// use od_report::itinerary::resolve;
///
/// let id = ServiceId::new("7601").unwrap();
/// let ply = Stop::new("ply").unwrap();
/// let lpd = Stop::new("lpd").unwrap();
/// let msc = Stop::new("msc").unwrap();
///
/// // Segments given out of order
/// let segments = vec![
///     Segment::new(id.clone(), lpd.clone(), msc.clone()),
///     Segment::new(id.clone(), ply.clone(), lpd.clone()),
/// ];
///
/// let itinerary = resolve(&segments).unwrap();
/// assert_eq!(itinerary.stops(), &[ply, lpd, msc]);
/// ```
pub fn resolve(segments: &[Segment]) -> Result<Itinerary, ItineraryError> {
    if segments.is_empty() {
        return Ok(Itinerary::default());
    }

    let total = segments.len();
    let mut leaving: HashMap<&Stop, usize> = HashMap::with_capacity(total);
    let mut arriving: HashSet<&Stop> = HashSet::with_capacity(total);

    for (idx, segment) in segments.iter().enumerate() {
        if leaving.insert(segment.origin(), idx).is_some() {
            return Err(ItineraryError::Branching {
                stop: segment.origin().clone(),
            });
        }
        if !arriving.insert(segment.destination()) {
            return Err(ItineraryError::Branching {
                stop: segment.destination().clone(),
            });
        }
    }

    let successors: Vec<Option<usize>> = segments
        .iter()
        .map(|s| leaving.get(s.destination()).copied())
        .collect();

    // The start is the only segment that no other segment leads into.
    let mut has_predecessor = vec![false; total];
    for &next in successors.iter().flatten() {
        has_predecessor[next] = true;
    }
    let starts: Vec<usize> = (0..total).filter(|&idx| !has_predecessor[idx]).collect();
    let &[start] = starts.as_slice() else {
        return Err(ItineraryError::NoUniqueStart {
            candidates: starts.len(),
        });
    };

    // With no branching, the walk from the unique start cannot enter a cycle.
    let mut stops = Vec::with_capacity(total + 1);
    let mut ordered = Vec::with_capacity(total);
    let mut current = Some(start);
    while let Some(idx) = current {
        let segment = &segments[idx];
        stops.push(segment.origin().clone());
        ordered.push(segment.clone());
        current = successors[idx];
        if current.is_none() {
            stops.push(segment.destination().clone());
        }
    }

    if ordered.len() != total {
        return Err(ItineraryError::Disconnected {
            visited: ordered.len(),
            total,
        });
    }

    debug!(
        stops = stops.len(),
        first = %stops[0],
        last = %stops[stops.len() - 1],
        "Resolved itinerary"
    );

    Ok(Itinerary {
        stops,
        segments: ordered,
    })
}

/// Every ordered pair of stops with the origin calling before the destination,
/// origin-major. `n` stops give `n * (n - 1) / 2` pairs.
pub fn od_pairs(stops: &[Stop]) -> impl Iterator<Item = (&Stop, &Stop)> {
    stops
        .iter()
        .enumerate()
        .flat_map(move |(idx, origin)| stops[idx + 1..].iter().map(move |dest| (origin, dest)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceId;

    fn id() -> ServiceId {
        ServiceId::new("7601").unwrap()
    }

    fn stop(name: &str) -> Stop {
        Stop::new(name).unwrap()
    }

    fn seg(origin: &str, destination: &str) -> Segment {
        Segment::new(id(), stop(origin), stop(destination))
    }

    fn stops(names: &[&str]) -> Vec<Stop> {
        names.iter().map(|n| stop(n)).collect()
    }

    fn abcd() -> Itinerary {
        resolve(&[seg("C", "D"), seg("A", "B"), seg("B", "C")]).unwrap()
    }

    #[test]
    fn empty_segments_resolve_to_empty_itinerary() {
        let itinerary = resolve(&[]).unwrap();
        assert!(itinerary.is_empty());
        assert!(itinerary.stops().is_empty());
    }

    #[test]
    fn single_segment() {
        let itinerary = resolve(&[seg("ply", "lpd")]).unwrap();
        assert_eq!(itinerary.stops(), stops(&["ply", "lpd"]).as_slice());
    }

    #[test]
    fn out_of_order_segments_are_ordered() {
        let itinerary = abcd();
        assert_eq!(itinerary.stops(), stops(&["A", "B", "C", "D"]).as_slice());
        assert_eq!(
            itinerary.segments(),
            &[seg("A", "B"), seg("B", "C"), seg("C", "D")]
        );
    }

    #[test]
    fn branching_origin_is_rejected() {
        let err = resolve(&[seg("A", "B"), seg("A", "C")]).unwrap_err();
        assert_eq!(err, ItineraryError::Branching { stop: stop("A") });
    }

    #[test]
    fn merging_destination_is_rejected() {
        let err = resolve(&[seg("A", "C"), seg("B", "C")]).unwrap_err();
        assert_eq!(err, ItineraryError::Branching { stop: stop("C") });
    }

    #[test]
    fn cycle_has_no_start() {
        let err = resolve(&[seg("A", "B"), seg("B", "C"), seg("C", "A")]).unwrap_err();
        assert_eq!(err, ItineraryError::NoUniqueStart { candidates: 0 });
    }

    #[test]
    fn two_paths_have_two_starts() {
        let err = resolve(&[seg("A", "B"), seg("C", "D")]).unwrap_err();
        assert_eq!(err, ItineraryError::NoUniqueStart { candidates: 2 });
    }

    #[test]
    fn path_plus_cycle_is_disconnected() {
        let err = resolve(&[seg("A", "B"), seg("X", "Y"), seg("Y", "X")]).unwrap_err();
        assert_eq!(
            err,
            ItineraryError::Disconnected {
                visited: 1,
                total: 3
            }
        );
    }

    #[test]
    fn legs_of_contiguous_runs() {
        let itinerary = abcd();
        assert_eq!(
            itinerary.legs_of(&stop("A"), &stop("C")).unwrap(),
            &[seg("A", "B"), seg("B", "C")]
        );
        assert_eq!(
            itinerary.legs_of(&stop("B"), &stop("D")).unwrap(),
            &[seg("B", "C"), seg("C", "D")]
        );
        assert_eq!(
            itinerary.legs_of(&stop("A"), &stop("D")).unwrap(),
            itinerary.segments()
        );
        assert_eq!(
            itinerary.legs_of(&stop("C"), &stop("D")).unwrap(),
            &[seg("C", "D")]
        );
    }

    #[test]
    fn legs_of_unknown_stop() {
        let err = abcd().legs_of(&stop("A"), &stop("Z")).unwrap_err();
        assert_eq!(err, ItineraryError::UnknownStop(stop("Z")));
    }

    #[test]
    fn legs_of_backwards_od() {
        let err = abcd().legs_of(&stop("C"), &stop("A")).unwrap_err();
        assert!(matches!(err, ItineraryError::DestinationNotReached { .. }));

        let err = abcd().legs_of(&stop("D"), &stop("A")).unwrap_err();
        assert!(matches!(err, ItineraryError::DestinationNotReached { .. }));

        let err = abcd().legs_of(&stop("B"), &stop("B")).unwrap_err();
        assert!(matches!(err, ItineraryError::DestinationNotReached { .. }));
    }

    #[test]
    fn od_pairs_enumerates_forward_pairs() {
        let stops = stops(&["A", "B", "C"]);
        let pairs: Vec<String> = od_pairs(&stops)
            .map(|(o, d)| format!("{o}{d}"))
            .collect();
        assert_eq!(pairs, vec!["AB", "AC", "BC"]);
        assert_eq!(od_pairs(&stops[..1]).count(), 0);
    }

    #[test]
    fn error_display() {
        let err = ItineraryError::Branching { stop: stop("lpd") };
        assert_eq!(err.to_string(), "inconsistent itinerary: branching at stop lpd");

        let err = ItineraryError::DestinationNotReached {
            origin: stop("msc"),
            destination: stop("ply"),
        };
        assert_eq!(
            err.to_string(),
            "destination ply is not reached from origin msc"
        );
    }
}
