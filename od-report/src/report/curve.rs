//! Cumulative curve points.

use std::ops::AddAssign;

use crate::domain::{Booking, Price};

/// Running count of bookings and revenue.
///
/// Revenue is kept in cents so that sums are exact. Both counters saturate
/// at their maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Number of bookings
    pub bookings: u32,
    /// Revenue in cents
    pub revenue_cents: u64,
}

impl Totals {
    /// Totals of a set of bookings.
    pub fn of(bookings: &[Booking]) -> Self {
        let mut totals = Totals::default();
        for booking in bookings {
            totals.record(booking.price(), 1);
        }
        totals
    }

    /// Adds `seats` bookings sold at `price`.
    pub fn record(&mut self, price: Price, seats: u32) {
        self.bookings = self.bookings.saturating_add(seats);
        self.revenue_cents = self.revenue_cents.saturating_add(price.revenue_cents(seats));
    }

    /// Returns the revenue in currency units.
    pub fn revenue(&self) -> f64 {
        self.revenue_cents as f64 / 100.0
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Self) {
        self.bookings = self.bookings.saturating_add(other.bookings);
        self.revenue_cents = self.revenue_cents.saturating_add(other.revenue_cents);
    }
}

/// One row of a booking curve: cumulative bookings and revenue up to and
/// including `day_x`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DataPoint {
    pub day_x: i32,
    pub bookings: u32,
    pub revenue: f64,
}

impl DataPoint {
    /// Creates a row for `day_x` from running totals.
    pub fn new(day_x: i32, totals: Totals) -> Self {
        Self {
            day_x,
            bookings: totals.bookings,
            revenue: totals.revenue(),
        }
    }
}

impl From<DataPoint> for (i32, u32, f64) {
    fn from(point: DataPoint) -> Self {
        (point.day_x, point.bookings, point.revenue)
    }
}
