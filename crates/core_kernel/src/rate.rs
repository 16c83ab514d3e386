//! Discount rates with precise decimal arithmetic
//!
//! Rates are stored as fractions (`0.15` for 15%) using rust_decimal so that
//! discount amounts never pick up floating-point noise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// A discount expressed as a fraction of an amount, between 0 and 1 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// Creates a rate from a fraction (`dec!(0.25)` for 25%)
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` if the fraction lies outside `[0, 1]`
    pub fn new(fraction: Decimal) -> Result<Self, CoreError> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(CoreError::InvalidRate(fraction));
        }
        Ok(Self(fraction))
    }

    /// Creates a rate from a whole percentage, capped at 100%
    pub fn from_percent(percent: u32) -> Self {
        Self(Decimal::from(percent.min(100)) / dec!(100))
    }

    /// A rate that never discounts anything
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the rate as a fraction
    pub fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (`15` for 15%)
    pub fn percent(&self) -> Decimal {
        (self.0 * dec!(100)).normalize()
    }

    /// Returns true if the rate never discounts anything
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Computes the discount on `amount`.
    ///
    /// The amount is not validated: zero yields zero and negative amounts
    /// scale linearly like any other value.
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.0
    }

    /// Returns `amount` with the discount subtracted
    pub fn net_of(&self, amount: Decimal) -> Decimal {
        amount - self.apply(amount)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_percent() {
        assert_eq!(DiscountRate::from_percent(15).fraction(), dec!(0.15));
        assert_eq!(DiscountRate::from_percent(250).fraction(), Decimal::ONE);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(DiscountRate::new(dec!(1.01)).is_err());
        assert!(DiscountRate::new(dec!(-0.01)).is_err());
        assert!(DiscountRate::new(dec!(0)).is_ok());
        assert!(DiscountRate::new(dec!(1)).is_ok());
    }

    #[test]
    fn test_display_is_whole_percentage() {
        assert_eq!(DiscountRate::from_percent(25).to_string(), "25%");
        assert_eq!(DiscountRate::zero().to_string(), "0%");
    }
}
