//! Quantities

use std::{fmt, num::NonZeroU32};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a requested quantity cannot be represented.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at one; zero or negative requests are rejected.
    #[error("quantity must be at least 1, got {0}")]
    BelowMinimum(i64),

    /// Quantity does not fit in a `u32`.
    #[error("quantity {0} is too large")]
    TooLarge(i64),
}

/// Number of units on a cart line. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity from a caller-supplied value.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::BelowMinimum`] when `value` is less than one.
    /// - [`QuantityError::TooLarge`] when `value` exceeds `u32::MAX`.
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value < 1 {
            return Err(QuantityError::BelowMinimum(value));
        }

        let value = u32::try_from(value).map_err(|_err| QuantityError::TooLarge(value))?;

        NonZeroU32::new(value)
            .map(Self)
            .ok_or(QuantityError::BelowMinimum(0))
    }

    /// The number of units.
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accepts_positive_values() -> TestResult {
        assert_eq!(Quantity::new(1)?, Quantity::ONE);
        assert_eq!(Quantity::new(12)?.get(), 12);

        Ok(())
    }

    #[test]
    fn rejects_zero_and_negative_values() {
        assert_eq!(Quantity::new(0), Err(QuantityError::BelowMinimum(0)));
        assert_eq!(Quantity::new(-3), Err(QuantityError::BelowMinimum(-3)));
    }

    #[test]
    fn rejects_values_beyond_u32() {
        let too_many = i64::from(u32::MAX) + 1;

        assert_eq!(Quantity::new(too_many), Err(QuantityError::TooLarge(too_many)));
    }

    #[test]
    fn deserializes_through_validation() {
        let parsed: Result<Quantity, _> = serde_norway::from_str("0");

        assert!(parsed.is_err(), "zero quantity should not deserialize");
    }
}
