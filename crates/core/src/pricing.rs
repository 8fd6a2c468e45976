//! Pricing

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Serialize;
use thiserror::Error;

use crate::{ingredients::Ingredient, quantity::Quantity};

/// Errors that can occur while pricing cart lines and orders.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The ingredient is not offered for the menu item.
    #[error("ingredient {ingredient} is not available for {item}")]
    IneligibleIngredient {
        /// Rejected ingredient
        ingredient: Ingredient,
        /// Name of the menu item it was requested for
        item: String,
    },

    /// An amount did not fit in minor units.
    #[error("price calculation overflowed")]
    Overflow,

    /// Tax rates are fractions in the range `0..=1`.
    #[error("tax rate {0} is outside 0..=1")]
    InvalidTaxRate(Decimal),
}

/// Unit price of a customised item: base price plus every ingredient surcharge.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum exceeds `u64`.
pub fn unit_price(
    base_price: u64,
    surcharges: impl IntoIterator<Item = u64>,
) -> Result<u64, PricingError> {
    surcharges
        .into_iter()
        .try_fold(base_price, u64::checked_add)
        .ok_or(PricingError::Overflow)
}

/// Line total: unit price × quantity.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product exceeds `u64`.
pub fn line_total(unit_price: u64, quantity: Quantity) -> Result<u64, PricingError> {
    unit_price
        .checked_mul(u64::from(quantity.get()))
        .ok_or(PricingError::Overflow)
}

/// Sum of line totals.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum exceeds `u64`.
pub fn total_price(line_totals: impl IntoIterator<Item = u64>) -> Result<u64, PricingError> {
    line_totals
        .into_iter()
        .try_fold(0_u64, u64::checked_add)
        .ok_or(PricingError::Overflow)
}

/// Flat delivery fee and percentage tax applied on top of a cart subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryPolicy {
    delivery_fee: u64,
    tax_rate: Decimal,
}

impl SummaryPolicy {
    /// Create a policy.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidTaxRate`] unless `tax_rate` is within `0..=1`.
    pub fn new(delivery_fee: u64, tax_rate: Decimal) -> Result<Self, PricingError> {
        if tax_rate.is_sign_negative() || tax_rate > Decimal::ONE {
            return Err(PricingError::InvalidTaxRate(tax_rate));
        }

        Ok(Self {
            delivery_fee,
            tax_rate,
        })
    }

    /// A policy that only sums lines.
    pub fn untaxed() -> Self {
        Self {
            delivery_fee: 0,
            tax_rate: Decimal::ZERO,
        }
    }

    /// Delivery fee in minor units.
    pub fn delivery_fee(&self) -> u64 {
        self.delivery_fee
    }

    /// Tax rate as a fraction.
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Tax owed on `subtotal`, rounded half away from zero to whole minor units.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the tax cannot be represented.
    pub fn tax_on(&self, subtotal: u64) -> Result<u64, PricingError> {
        Decimal::from(subtotal)
            .checked_mul(self.tax_rate)
            .map(|tax| tax.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|tax| tax.to_u64())
            .ok_or(PricingError::Overflow)
    }
}

/// Order summary shown before checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Sum of all line totals
    pub subtotal: u64,

    /// Delivery fee; zero for an empty cart
    pub delivery_fee: u64,

    /// Tax on the subtotal
    pub tax: u64,

    /// Amount due
    pub total: u64,
}

impl OrderSummary {
    /// Summarise a set of line totals under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if any intermediate amount exceeds `u64`.
    pub fn calculate(
        line_totals: impl IntoIterator<Item = u64>,
        policy: &SummaryPolicy,
    ) -> Result<Self, PricingError> {
        let mut line_totals = line_totals.into_iter().peekable();

        if line_totals.peek().is_none() {
            return Ok(Self::default());
        }

        let subtotal = total_price(line_totals)?;
        let delivery_fee = policy.delivery_fee();
        let tax = policy.tax_on(subtotal)?;

        let total = total_price([subtotal, delivery_fee, tax])?;

        Ok(Self {
            subtotal,
            delivery_fee,
            tax,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn unit_price_adds_surcharges() -> TestResult {
        assert_eq!(unit_price(300, [100])?, 400);
        assert_eq!(unit_price(500, [])?, 500);
        assert_eq!(unit_price(500, [40, 60, 25])?, 625);

        Ok(())
    }

    #[test]
    fn unit_price_overflow_is_an_error() {
        assert_eq!(unit_price(u64::MAX, [1]), Err(PricingError::Overflow));
    }

    #[test]
    fn line_total_multiplies_by_quantity() -> TestResult {
        assert_eq!(line_total(500, Quantity::new(2)?)?, 1000);

        Ok(())
    }

    #[test]
    fn line_total_overflow_is_an_error() -> TestResult {
        assert_eq!(
            line_total(u64::MAX, Quantity::new(2)?),
            Err(PricingError::Overflow)
        );

        Ok(())
    }

    #[test]
    fn total_price_of_nothing_is_zero() -> TestResult {
        assert_eq!(total_price([])?, 0);

        Ok(())
    }

    #[test]
    fn total_price_is_order_independent() -> TestResult {
        let forwards = total_price([1000, 400, 125])?;
        let backwards = total_price([125, 400, 1000])?;

        assert_eq!(forwards, 1525);
        assert_eq!(forwards, backwards);

        Ok(())
    }

    #[test]
    fn policy_rejects_out_of_range_tax_rates() {
        assert_eq!(
            SummaryPolicy::new(0, Decimal::new(-1, 2)),
            Err(PricingError::InvalidTaxRate(Decimal::new(-1, 2)))
        );

        assert_eq!(
            SummaryPolicy::new(0, Decimal::new(101, 2)),
            Err(PricingError::InvalidTaxRate(Decimal::new(101, 2)))
        );
    }

    #[test]
    fn tax_rounds_half_away_from_zero() -> TestResult {
        let policy = SummaryPolicy::new(0, Decimal::new(18, 2))?;

        // 18% of 1325 is 238.5
        assert_eq!(policy.tax_on(1325)?, 239);
        // 18% of 1324 is 238.32
        assert_eq!(policy.tax_on(1324)?, 238);

        Ok(())
    }

    #[test]
    fn summary_adds_delivery_and_tax() -> TestResult {
        let policy = SummaryPolicy::new(4000, Decimal::new(18, 2))?;

        let summary = OrderSummary::calculate([1000, 400], &policy)?;

        assert_eq!(
            summary,
            OrderSummary {
                subtotal: 1400,
                delivery_fee: 4000,
                tax: 252,
                total: 5652,
            }
        );

        Ok(())
    }

    #[test]
    fn empty_summary_owes_nothing() -> TestResult {
        let policy = SummaryPolicy::new(4000, Decimal::new(18, 2))?;

        assert_eq!(OrderSummary::calculate([], &policy)?, OrderSummary::default());

        Ok(())
    }

    #[test]
    fn untaxed_summary_is_plain_subtotal() -> TestResult {
        let summary = OrderSummary::calculate([500, 500], &SummaryPolicy::untaxed())?;

        assert_eq!(summary.subtotal, 1000);
        assert_eq!(summary.total, 1000);

        Ok(())
    }
}
