//! Forecast of bookings and revenue under a price/demand scenario.
//!
//! Inventory is a seat allotment per price tier ([`Pricing`]). Expected
//! unconstrained demand is given per day-x and price tier ([`DemandMatrix`]).
//! Each day the cheapest tier with seats left is offered:
//!
//! - bookings at a tier = min(seats left, demand at that tier − bookings
//!   already made that day)
//! - if the tier sells out, the remaining demand moves on to the next tier
//!   the same day
//! - if the tier still has seats, it is the price offered that day and
//!   higher tiers sell nothing
//!
//! Seat allotments are shared across days: a tier sold out on one day stays
//! sold out for the rest of the run.

use std::collections::BTreeMap;

use tracing::debug;

use super::{DataPoint, Totals};
use crate::domain::Price;

/// Seats available at each price tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pricing(BTreeMap<Price, u32>);

impl Pricing {
    /// Creates an empty pricing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seats available at `price`, replacing any previous allotment.
    pub fn set(&mut self, price: Price, seats: u32) {
        self.0.insert(price, seats);
    }

    /// Returns the seats available at `price` (0 for unknown tiers).
    pub fn seats(&self, price: Price) -> u32 {
        self.0.get(&price).copied().unwrap_or(0)
    }

    /// Returns the total seats over all tiers.
    pub fn total_seats(&self) -> u64 {
        self.0.values().map(|&seats| u64::from(seats)).sum()
    }

    /// Returns true if there are no price tiers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates tiers by ascending price.
    pub fn tiers(&self) -> impl Iterator<Item = (Price, u32)> + '_ {
        self.0.iter().map(|(&price, &seats)| (price, seats))
    }
}

impl FromIterator<(Price, u32)> for Pricing {
    fn from_iter<I: IntoIterator<Item = (Price, u32)>>(iter: I) -> Self {
        Pricing(iter.into_iter().collect())
    }
}

/// Expected bookings per day-x and price tier, absent inventory limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandMatrix(BTreeMap<i32, BTreeMap<Price, u32>>);

impl DemandMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected bookings at `price` on `day_x`.
    pub fn set(&mut self, day_x: i32, price: Price, bookings: u32) {
        self.0.entry(day_x).or_default().insert(price, bookings);
    }

    /// Registers `day_x` with the given tiers, replacing any previous row.
    pub fn set_day<I>(&mut self, day_x: i32, tiers: I)
    where
        I: IntoIterator<Item = (Price, u32)>,
    {
        self.0.insert(day_x, tiers.into_iter().collect());
    }

    /// Returns the expected bookings at `price` on `day_x` (0 when absent).
    pub fn demand(&self, day_x: i32, price: Price) -> u32 {
        self.0
            .get(&day_x)
            .and_then(|row| row.get(&price))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the number of days in the matrix.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the matrix has no days.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates days from the earliest (most negative) to the latest.
    pub fn days(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.keys().copied()
    }
}

/// Simulate sales day by day and return the cumulative curve.
///
/// Days are taken in ascending order and every day in `demand` produces one
/// row, including days with no sales once inventory is exhausted. The
/// cumulative values start from `start` (use [`Totals::default`] for a bare
/// forecast, or the bookings already sold to continue a history curve).
///
/// `pricing` is copied; the caller's allotments are left untouched, so the
/// same inputs can be forecast again.
///
/// Returns an empty curve when there are no price tiers or no demand days.
///
/// # Examples
///
/// ```
/// use od_report::domain::Price;
/// use od_report::report::{DemandMatrix, Pricing, Totals, forecast};
///
/// let pricing: Pricing = [(Price::from_units(20), 2), (Price::from_units(30), 5)]
///     .into_iter()
///     .collect();
///
/// let mut demand = DemandMatrix::new();
/// demand.set(-1, Price::from_units(20), 3);
/// demand.set(-1, Price::from_units(30), 1);
/// demand.set(0, Price::from_units(30), 2);
///
/// let curve = forecast(&pricing, &demand, Totals::default());
/// // D-1: both 20 seats sell, the third customer does not pay 30
/// assert_eq!((curve[0].bookings, curve[0].revenue), (2, 40.0));
/// // D0: 2 bookings at 30
/// assert_eq!((curve[1].bookings, curve[1].revenue), (4, 100.0));
/// assert_eq!(pricing.seats(Price::from_units(20)), 2);
/// ```
pub fn forecast(pricing: &Pricing, demand: &DemandMatrix, start: Totals) -> Vec<DataPoint> {
    if pricing.is_empty() || demand.is_empty() {
        return Vec::new();
    }

    let mut seats = pricing.0.clone();
    let mut totals = start;
    let mut curve = Vec::with_capacity(demand.len());

    for (&day_x, day_demand) in &demand.0 {
        totals += sell_day(&mut seats, day_demand);
        curve.push(DataPoint::new(day_x, totals));
    }

    debug!(
        days = curve.len(),
        sold = totals.bookings.saturating_sub(start.bookings),
        seats_left = seats.values().map(|&left| u64::from(left)).sum::<u64>(),
        "Forecast complete"
    );

    curve
}

/// Sells one day's demand against the remaining seats, cheapest tier first.
fn sell_day(seats: &mut BTreeMap<Price, u32>, demand: &BTreeMap<Price, u32>) -> Totals {
    let mut sold_today = Totals::default();

    for (&price, available) in seats.iter_mut() {
        if *available == 0 {
            continue;
        }

        let wanted = demand
            .get(&price)
            .copied()
            .unwrap_or(0)
            .saturating_sub(sold_today.bookings);
        let sold = wanted.min(*available);
        *available -= sold;
        sold_today.record(price, sold);

        if *available > 0 {
            break;
        }
    }

    sold_today
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn scenario() -> impl Strategy<Value = (Pricing, DemandMatrix)> {
        let pricing = proptest::collection::btree_map(1u32..20, 0u32..10, 0..6)
            .prop_map(|tiers| {
                tiers
                    .into_iter()
                    .map(|(units, seats)| (Price::from_units(units * 10), seats))
                    .collect::<Pricing>()
            });
        let demand = proptest::collection::vec(
            (-30i32..=0, 1u32..20, 0u32..10),
            0..60,
        )
        .prop_map(|cells| {
            let mut demand = DemandMatrix::new();
            for (day, units, count) in cells {
                demand.set(day, Price::from_units(units * 10), count);
            }
            demand
        });
        (pricing, demand)
    }

    proptest! {
        /// Cumulative values never decrease and never exceed the seats on sale
        #[test]
        fn monotonic_and_capped((pricing, demand) in scenario()) {
            let curve = forecast(&pricing, &demand, Totals::default());
            if !pricing.is_empty() {
                prop_assert_eq!(curve.len(), demand.len());
            }
            for pair in curve.windows(2) {
                prop_assert!(pair[0].day_x < pair[1].day_x);
                prop_assert!(pair[0].bookings <= pair[1].bookings);
                prop_assert!(pair[0].revenue <= pair[1].revenue);
            }
            if let Some(last) = curve.last() {
                prop_assert!(u64::from(last.bookings) <= pricing.total_seats());
            }
        }
    }
}
