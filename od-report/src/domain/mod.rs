//! Domain types for the bookings report.
//!
//! This module contains the value types describing one service: its stops,
//! the segments joining them, the origin-destination pairs it sells and the
//! bookings made on them. Values are validated at construction, so code that
//! receives them can trust their invariants.

mod booking;
mod error;
mod od;
mod price;
mod segment;
mod service;
mod service_id;
mod stop;

pub use booking::{Booking, InvalidBooking};
pub use error::DomainError;
pub use od::Od;
pub use price::{InvalidPrice, Price};
pub use segment::Segment;
pub use service::Service;
pub use service_id::{InvalidServiceId, ServiceId};
pub use stop::{InvalidStop, Stop};
