//! Price type.

use std::fmt;

/// Error returned when creating an invalid price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

/// A non-negative fare amount.
///
/// Stored as a whole number of cents so that prices are totally ordered
/// (price tiers are map keys) and revenue sums are exact.
///
/// # Examples
///
/// ```
/// use od_report::domain::Price;
///
/// let p = Price::new(19.99).unwrap();
/// assert_eq!(p.cents(), 1999);
/// assert_eq!(p.amount(), 19.99);
///
/// assert_eq!(Price::from_units(20), Price::new(20.0).unwrap());
///
/// assert!(Price::new(-1.0).is_err());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

/// Largest amount accepted by [`Price::new`].
const MAX_AMOUNT: f64 = 1.0e12;

impl Price {
    /// Create a price from an amount in currency units, rounded to the cent.
    pub fn new(amount: f64) -> Result<Self, InvalidPrice> {
        if !amount.is_finite() {
            return Err(InvalidPrice {
                reason: "amount must be a finite number",
            });
        }
        if amount < 0.0 {
            return Err(InvalidPrice {
                reason: "amount cannot be negative",
            });
        }
        if amount > MAX_AMOUNT {
            return Err(InvalidPrice {
                reason: "amount is too large",
            });
        }
        Ok(Price((amount * 100.0).round() as u64))
    }

    /// Create a price from a whole number of currency units.
    pub const fn from_units(units: u32) -> Self {
        Price(units as u64 * 100)
    }

    /// Create a price from a number of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    /// Returns the price in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the price in currency units.
    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Revenue, in cents, of selling `seats` seats at this price.
    ///
    /// Saturates at `u64::MAX`.
    pub fn revenue_cents(&self, seats: u32) -> u64 {
        self.0.saturating_mul(u64::from(seats))
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidPrice;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl serde::Serialize for Price {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount())
    }
}

impl<'de> serde::Deserialize<'de> for Price {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::new(amount).map_err(serde::de::Error::custom)
    }
}
