//! Pricing Config

use clap::Args;
use rust_decimal::Decimal;

use crust::pricing::{PricingError, SummaryPolicy};

/// Order summary settings.
#[derive(Debug, Args)]
pub struct PricingConfig {
    /// Flat delivery fee in minor units of the menu currency
    #[arg(long, env = "CRUST_DELIVERY_FEE", default_value_t = 4000)]
    pub delivery_fee: u64,

    /// Tax rate applied to the subtotal, as a fraction (0.18 = 18%)
    #[arg(long, env = "CRUST_TAX_RATE", default_value = "0.18")]
    pub tax_rate: Decimal,
}

impl PricingConfig {
    /// Build the summary policy these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidTaxRate`] if the tax rate is outside `0..=1`.
    pub fn summary_policy(&self) -> Result<SummaryPolicy, PricingError> {
        SummaryPolicy::new(self.delivery_fee, self.tax_rate)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        pricing: PricingConfig,
    }

    #[test]
    fn parses_tax_rate_and_delivery_fee() -> TestResult {
        let harness =
            Harness::try_parse_from(["harness", "--delivery-fee", "2500", "--tax-rate", "0.05"])?;

        let policy = harness.pricing.summary_policy()?;

        assert_eq!(policy.delivery_fee(), 2500);
        assert_eq!(policy.tax_rate(), Decimal::new(5, 2));

        Ok(())
    }

    #[test]
    fn rejects_tax_rates_above_one() -> TestResult {
        let harness = Harness::try_parse_from(["harness", "--tax-rate", "1.5"])?;

        let result = harness.pricing.summary_policy();

        assert!(
            matches!(result, Err(PricingError::InvalidTaxRate(_))),
            "expected invalid tax rate, got {result:?}"
        );

        Ok(())
    }
}
