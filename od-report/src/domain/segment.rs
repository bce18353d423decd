//! Segment (leg) type.
//!
//! A `Segment` is one directed hop between two consecutive stops of a
//! service. A service whose itinerary is A-B-C-D has three segments:
//! A-B, B-C and C-D.

use std::fmt;

use super::{ServiceId, Stop};

/// One directed hop between two consecutive stops of a service.
///
/// Two segments are equal only if they belong to the same service and join
/// the same origin and destination.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Segment {
    #[serde(skip)]
    service: ServiceId,
    origin: Stop,
    destination: Stop,
}

impl Segment {
    /// Creates a segment of `service` from `origin` to `destination`.
    pub fn new(service: ServiceId, origin: Stop, destination: Stop) -> Self {
        Self {
            service,
            origin,
            destination,
        }
    }

    /// Returns the service this segment belongs to.
    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    /// Returns the departure stop.
    pub fn origin(&self) -> &Stop {
        &self.origin
    }

    /// Returns the arrival stop.
    pub fn destination(&self) -> &Stop {
        &self.destination
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment({}: {}-{})",
            self.service, self.origin, self.destination
        )
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str) -> ServiceId {
        ServiceId::new(id).unwrap()
    }

    fn stop(name: &str) -> Stop {
        Stop::new(name).unwrap()
    }

    #[test]
    fn equality_needs_same_service_and_stops() {
        let a = Segment::new(service("7601"), stop("ply"), stop("lpd"));
        let b = Segment::new(service("7601"), stop("ply"), stop("lpd"));
        let other_service = Segment::new(service("6111"), stop("ply"), stop("lpd"));
        let reversed = Segment::new(service("7601"), stop("lpd"), stop("ply"));

        assert_eq!(a, b);
        assert_ne!(a, other_service);
        assert_ne!(a, reversed);
    }

    #[test]
    fn display() {
        let seg = Segment::new(service("7601"), stop("ply"), stop("lpd"));
        assert_eq!(seg.to_string(), "ply-lpd");
        assert_eq!(format!("{:?}", seg), "Segment(7601: ply-lpd)");
    }

    #[test]
    fn serializes_endpoints() {
        let seg = Segment::new(service("7601"), stop("ply"), stop("lpd"));
        assert_eq!(
            serde_json::to_string(&seg).unwrap(),
            r#"{"origin":"ply","destination":"lpd"}"#
        );
    }
}
