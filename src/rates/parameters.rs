//! Pricing parameters: margin rates and expense ratio
//!
//! The margin rate depends on the density category (urban zones carry 18%,
//! rural zones 20%); the expense ratio is a uniform 15% applied via gross-up
//! division regardless of density.

use crate::error::TariffError;
use crate::quote::DensityCategory;

/// Process-wide pricing constants, fixed for the product generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParameters {
    /// Margin rate for high-density zones
    pub margin_high: f64,

    /// Margin rate for low-density zones
    pub margin_low: f64,

    /// Fraction of the commercial premium allocated to administrative and
    /// distribution expense
    pub expense_ratio: f64,
}

impl PricingParameters {
    /// Published parameters from the Excel dataset
    pub fn published() -> Self {
        Self {
            margin_high: 0.18,
            margin_low: 0.20,
            expense_ratio: 0.15,
        }
    }

    /// Create from loaded CSV rates
    pub fn from_loaded(loaded: &super::loader::LoadedRates) -> Result<Self, TariffError> {
        let parameters = Self {
            margin_high: loaded.margin_high,
            margin_low: loaded.margin_low,
            expense_ratio: loaded.expense_ratio,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Margin rate for the given density category
    pub fn margin_rate(&self, density: DensityCategory) -> f64 {
        match density {
            DensityCategory::High => self.margin_high,
            DensityCategory::Low => self.margin_low,
        }
    }

    /// Check the parameter invariants: margins non-negative, expense ratio
    /// in [0, 1) so the gross-up never divides by zero or flips sign
    pub fn validate(&self) -> Result<(), TariffError> {
        for margin in [self.margin_high, self.margin_low] {
            if margin < 0.0 {
                return Err(TariffError::NegativeMarginRate(margin));
            }
        }

        if !(0.0..1.0).contains(&self.expense_ratio) {
            return Err(TariffError::ExpenseRatioOutOfRange(self.expense_ratio));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_parameters() {
        let params = PricingParameters::published();

        assert!(params.validate().is_ok());
        assert_eq!(params.margin_rate(DensityCategory::High), 0.18);
        assert_eq!(params.margin_rate(DensityCategory::Low), 0.20);
        assert_eq!(params.expense_ratio, 0.15);
    }

    #[test]
    fn test_rejects_expense_ratio_of_one() {
        let params = PricingParameters {
            expense_ratio: 1.0,
            ..PricingParameters::published()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            TariffError::ExpenseRatioOutOfRange(1.0)
        );
    }

    #[test]
    fn test_rejects_negative_margin() {
        let params = PricingParameters {
            margin_low: -0.01,
            ..PricingParameters::published()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            TariffError::NegativeMarginRate(-0.01)
        );
    }
}
