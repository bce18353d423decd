//! Domain error types.
//!
//! These errors represent validation failures when building domain values
//! from raw input. Itinerary consistency errors live in
//! [`crate::itinerary::ItineraryError`].

use super::{InvalidBooking, InvalidPrice, InvalidServiceId, InvalidStop};

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Stop(#[from] InvalidStop),

    #[error(transparent)]
    ServiceId(#[from] InvalidServiceId),

    #[error(transparent)]
    Price(#[from] InvalidPrice),

    #[error(transparent)]
    Booking(#[from] InvalidBooking),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, ServiceId, Stop};

    #[test]
    fn error_display() {
        let err: DomainError = Stop::new("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid stop: stop name cannot be empty");

        let err: DomainError = ServiceId::new("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid service id: service id cannot be empty");

        let err: DomainError = Price::new(-3.0).unwrap_err().into();
        assert_eq!(err.to_string(), "invalid price: amount cannot be negative");
    }
}
