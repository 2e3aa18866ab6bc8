//! TaxRate value object - a decimal fraction applied to a subtotal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Money, ValidationError};

/// A tax rate expressed as a decimal fraction (0.18 = 18%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(f64);

impl TaxRate {
    /// No tax.
    pub const ZERO: Self = Self(0.0);

    /// The standard 18% GST rate.
    pub const STANDARD_GST: Self = Self(0.18);

    /// Creates a TaxRate, returning an error if outside `[0, 1]`.
    pub fn try_new(fraction: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ValidationError::out_of_range(
                "tax_rate", 0.0, 1.0, fraction,
            ));
        }
        Ok(Self(fraction))
    }

    /// Returns the rate as a fraction.
    pub fn as_fraction(&self) -> f64 {
        self.0
    }

    /// Applies the rate to an amount, rounding to the nearest rupee.
    pub fn apply(&self, amount: Money) -> Money {
        Money::from_f64_rounded(amount.as_f64() * self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::STANDARD_GST
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_valid_fractions() {
        assert!(TaxRate::try_new(0.0).is_ok());
        assert!(TaxRate::try_new(0.18).is_ok());
        assert!(TaxRate::try_new(1.0).is_ok());
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(TaxRate::try_new(-0.1).is_err());
        assert!(TaxRate::try_new(1.5).is_err());
    }

    #[test]
    fn apply_computes_gst_on_subtotal() {
        let tax = TaxRate::STANDARD_GST.apply(Money::from_rupees(28000));
        assert_eq!(tax, Money::from_rupees(5040));
    }

    #[test]
    fn apply_rounds_to_nearest_rupee() {
        // 18% of 101 = 18.18 -> 18
        let tax = TaxRate::STANDARD_GST.apply(Money::from_rupees(101));
        assert_eq!(tax, Money::from_rupees(18));
    }

    #[test]
    fn zero_rate_yields_zero_tax() {
        assert_eq!(TaxRate::ZERO.apply(Money::from_rupees(9999)), Money::ZERO);
    }

    #[test]
    fn default_is_standard_gst() {
        assert_eq!(TaxRate::default(), TaxRate::STANDARD_GST);
    }

    #[test]
    fn display_shows_percentage() {
        assert_eq!(format!("{}", TaxRate::STANDARD_GST), "18%");
    }
}
