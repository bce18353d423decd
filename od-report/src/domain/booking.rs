//! Booking type.

use super::{Price, Stop};

/// Error returned when creating an invalid booking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking: {reason}")]
pub struct InvalidBooking {
    reason: &'static str,
}

/// One sold seat: a passenger travelling from `origin` to `destination`,
/// sold `sale_day_x` days relative to departure at `price`.
///
/// Bookings are immutable once created. Several bookings may carry
/// identical values.
///
/// # Examples
///
/// ```
/// use od_report::domain::{Booking, Price, Stop};
///
/// let ply = Stop::new("ply").unwrap();
/// let lpd = Stop::new("lpd").unwrap();
///
/// let booking = Booking::new(ply.clone(), lpd.clone(), -30, Price::from_units(20)).unwrap();
/// assert_eq!(booking.sale_day_x(), -30);
///
/// // Sales cannot happen after departure
/// assert!(Booking::new(ply, lpd, 1, Price::from_units(20)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Booking {
    origin: Stop,
    destination: Stop,
    sale_day_x: i32,
    price: Price,
}

impl Booking {
    /// Create a booking.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `sale_day_x` is after departure (positive) or if
    /// origin and destination are the same stop.
    pub fn new(
        origin: Stop,
        destination: Stop,
        sale_day_x: i32,
        price: Price,
    ) -> Result<Self, InvalidBooking> {
        if sale_day_x > 0 {
            return Err(InvalidBooking {
                reason: "sale day cannot be after departure",
            });
        }
        if origin == destination {
            return Err(InvalidBooking {
                reason: "origin and destination must differ",
            });
        }
        Ok(Booking {
            origin,
            destination,
            sale_day_x,
            price,
        })
    }

    /// Returns the boarding stop.
    pub fn origin(&self) -> &Stop {
        &self.origin
    }

    /// Returns the alighting stop.
    pub fn destination(&self) -> &Stop {
        &self.destination
    }

    /// Returns the day-x of the sale (0 is departure day, negative before).
    pub fn sale_day_x(&self) -> i32 {
        self.sale_day_x
    }

    /// Returns the price paid.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns true if this booking travels from `origin` to `destination`.
    pub fn is_for(&self, origin: &Stop, destination: &Stop) -> bool {
        &self.origin == origin && &self.destination == destination
    }
}
