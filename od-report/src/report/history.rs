//! Historical booking curve.

use super::{DataPoint, Totals};
use crate::domain::Booking;

/// Cumulative bookings and revenue per sale day.
///
/// Bookings are taken in sale order; all bookings sold on the same day-x
/// collapse into a single row, so rows are strictly increasing in day-x.
/// The input order does not matter.
///
/// # Examples
///
/// ```
/// use od_report::domain::{Booking, Price, Stop};
/// use od_report::report::history;
///
/// let ply = Stop::new("ply").unwrap();
/// let lpd = Stop::new("lpd").unwrap();
/// let sale = |day, price| Booking::new(ply.clone(), lpd.clone(), day, Price::from_units(price)).unwrap();
///
/// let curve = history(&[sale(-20, 40), sale(-30, 20), sale(-20, 40), sale(-25, 30)]);
/// let rows: Vec<(i32, u32, f64)> = curve.into_iter().map(Into::into).collect();
/// assert_eq!(rows, vec![(-30, 1, 20.0), (-25, 2, 50.0), (-20, 4, 130.0)]);
/// ```
pub fn history(bookings: &[Booking]) -> Vec<DataPoint> {
    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by_key(|b| b.sale_day_x());

    let mut totals = Totals::default();
    let mut curve: Vec<DataPoint> = Vec::new();

    for booking in sorted {
        totals.record(booking.price(), 1);
        let point = DataPoint::new(booking.sale_day_x(), totals);
        match curve.last_mut() {
            Some(last) if last.day_x == point.day_x => *last = point,
            _ => curve.push(point),
        }
    }

    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, Stop};

    fn sale(day_x: i32, price: f64) -> Booking {
        Booking::new(
            Stop::new("ply").unwrap(),
            Stop::new("lpd").unwrap(),
            day_x,
            Price::new(price).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn empty_bookings_give_empty_curve() {
        assert!(history(&[]).is_empty());
    }

    #[test]
    fn manifest_example() {
        let curve = history(&[
            sale(-30, 20.0),
            sale(-25, 30.0),
            sale(-20, 40.0),
            sale(-20, 40.0),
        ]);
        assert_eq!(curve.len(), 3);
        assert_eq!(
            curve[0],
            DataPoint {
                day_x: -30,
                bookings: 1,
                revenue: 20.0
            }
        );
        assert_eq!(
            curve[1],
            DataPoint {
                day_x: -25,
                bookings: 2,
                revenue: 50.0
            }
        );
        assert_eq!(
            curve[2],
            DataPoint {
                day_x: -20,
                bookings: 4,
                revenue: 130.0
            }
        );
    }

    #[test]
    fn same_day_sales_collapse() {
        let curve = history(&[sale(0, 10.0), sale(0, 15.5), sale(0, 0.0)]);
        assert_eq!(
            curve,
            vec![DataPoint {
                day_x: 0,
                bookings: 3,
                revenue: 25.5
            }]
        );
    }

    #[test]
    fn cent_prices_sum_exactly() {
        let curve = history(&[sale(-2, 0.1), sale(-1, 0.2)]);
        assert_eq!(curve[1].revenue, 0.3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Price, Stop};
    use proptest::prelude::*;

    fn sales() -> impl Strategy<Value = Vec<Booking>> {
        proptest::collection::vec((-60i32..=0, 0u32..200), 0..50).prop_map(|rows| {
            rows.into_iter()
                .map(|(day, price)| {
                    Booking::new(
                        Stop::new("A").unwrap(),
                        Stop::new("B").unwrap(),
                        day,
                        Price::from_units(price),
                    )
                    .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        /// Days strictly increase and the last row holds the grand totals
        #[test]
        fn strictly_increasing_and_complete(bookings in sales()) {
            let curve = history(&bookings);
            for pair in curve.windows(2) {
                prop_assert!(pair[0].day_x < pair[1].day_x);
                prop_assert!(pair[0].bookings < pair[1].bookings);
            }
            match curve.last() {
                Some(last) => {
                    let totals = Totals::of(&bookings);
                    prop_assert_eq!(last.bookings, totals.bookings);
                    prop_assert_eq!(last.revenue, totals.revenue());
                }
                None => prop_assert!(bookings.is_empty()),
            }
        }
    }
}
