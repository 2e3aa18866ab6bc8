//! Money value object - whole-rupee currency amounts.
//!
//! Rate-card prices carry no fractional paise, so amounts are
//! whole-currency-unit integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A non-fractional currency amount in rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Creates an amount from a fractional value, rounding to the nearest rupee.
    pub fn from_f64_rounded(value: f64) -> Self {
        Self(value.round() as i64)
    }

    /// Returns the amount in whole rupees.
    pub fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a float, for rate arithmetic.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Multiplies by a unit quantity, saturating on overflow.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rupees_round_trips() {
        assert_eq!(Money::from_rupees(15000).rupees(), 15000);
    }

    #[test]
    fn from_f64_rounds_to_nearest_rupee() {
        assert_eq!(Money::from_f64_rounded(99.4), Money::from_rupees(99));
        assert_eq!(Money::from_f64_rounded(99.5), Money::from_rupees(100));
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Money::from_rupees(150).times(4), Money::from_rupees(600));
    }

    #[test]
    fn times_saturates_on_overflow() {
        let huge = Money::from_rupees(i64::MAX);
        assert_eq!(huge.times(2), Money::from_rupees(i64::MAX));
    }

    #[test]
    fn sum_over_empty_iterator_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn display_prefixes_rupee_sign() {
        assert_eq!(format!("{}", Money::from_rupees(28000)), "₹28000");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_rupees(450)).unwrap();
        assert_eq!(json, "450");
    }
}
