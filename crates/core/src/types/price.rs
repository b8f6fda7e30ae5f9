//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as [`Decimal`] so that cart totals never drift the way
//! floating point sums do. On the wire they are plain JSON numbers, which is
//! what the catalog API sends and what the persisted cart stores.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in the store's single display currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units, saturating at the decimal range.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Amount rounded to two places, e.g. `"19.90"`.
    #[must_use]
    pub fn to_fixed(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_fixed())
    }
}

impl Add for Price {
    type Output = Self;

    /// Saturates at the decimal range instead of panicking.
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_pads_and_rounds() {
        assert_eq!(Price::new(Decimal::from(10)).to_fixed(), "10.00");
        assert_eq!(Price::new(Decimal::new(9995, 3)).to_fixed(), "10.00");
        assert_eq!(Price::new(Decimal::new(1234, 3)).to_fixed(), "1.23");
    }

    #[test]
    fn test_display_has_dollar_sign() {
        assert_eq!(Price::from_cents(1999).to_string(), "$19.99");
    }

    #[test]
    fn test_times_and_sum() {
        let unit = Price::from_cents(999);
        let total: Price = [unit.times(2), Price::from_cents(2)].into_iter().sum();
        assert_eq!(total, Price::from_cents(2000));
    }

    #[test]
    fn test_times_and_sum_saturate() {
        let huge: Price = serde_json::from_str("7e28").unwrap();
        assert_eq!(huge.times(2).amount(), Decimal::MAX);
        let total: Price = [huge, huge, Price::from_cents(1)].into_iter().sum();
        assert_eq!(total.amount(), Decimal::MAX);
    }

    #[test]
    fn test_deserializes_json_number() {
        let price: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(price, Price::from_cents(999));
        let price: Price = serde_json::from_str("20").unwrap();
        assert_eq!(price, Price::from_cents(2000));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_string(&Price::from_cents(999)).unwrap();
        assert_eq!(json, "9.99");
    }
}
