//! Premium quoting: density categories, the calculator, and schedules

mod schedule;

pub use schedule::{ScheduleRow, TariffSchedule};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;
use crate::rates::Tariff;

/// Medical-provider density of the applicant's geographic zone
///
/// Decided once at the presentation boundary (the front-end maps its
/// human-readable zone label to a category); the rating engine itself never
/// inspects zone strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityCategory {
    /// Urban zone with high medical-provider density
    High,
    /// Rural zone with low medical-provider density
    Low,
}

impl DensityCategory {
    /// Both categories, in table column order
    pub const ALL: [DensityCategory; 2] = [DensityCategory::High, DensityCategory::Low];

    /// Wire representation, matching the serde form
    pub fn as_str(&self) -> &'static str {
        match self {
            DensityCategory::High => "high",
            DensityCategory::Low => "low",
        }
    }
}

impl fmt::Display for DensityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DensityCategory {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(DensityCategory::High),
            "low" => Ok(DensityCategory::Low),
            _ => Err(QuoteError::InvalidCategory(s.to_string())),
        }
    }
}

/// Decomposition of a commercial premium, in €/year at full precision
///
/// Ephemeral: produced per quote, owned by the caller, never persisted.
/// Presentation layers are responsible for rounding (two decimals) and
/// currency labeling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteResult {
    /// Pure risk cost for the age and density, straight from the table
    pub base_cost: f64,

    /// Margin and expense load combined: `commercial_premium - base_cost`
    pub loadings: f64,

    /// Final annual price charged
    pub commercial_premium: f64,
}

impl Tariff {
    /// Compute the commercial premium for a given age and density category
    ///
    /// `commercial_premium = base_cost * (1 + margin) / (1 - expense_ratio)`
    ///
    /// Pure and deterministic: identical inputs yield bit-identical results.
    /// Ages outside 65-94 are rejected, never clamped.
    pub fn quote(&self, age: u8, density: DensityCategory) -> Result<QuoteResult, QuoteError> {
        let base_cost = self
            .rates
            .base_cost(age, density)
            .ok_or(QuoteError::AgeOutOfRange(age))?;

        let margin = self.parameters.margin_rate(density);
        let commercial_premium = base_cost * (1.0 + margin) / (1.0 - self.parameters.expense_ratio);
        let loadings = commercial_premium - base_cost;

        Ok(QuoteResult {
            base_cost,
            loadings,
            commercial_premium,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quote_age_65_high_density() {
        let tariff = Tariff::published();

        // 22.58 * 1.18 / 0.85 = 31.3447...
        let quote = tariff.quote(65, DensityCategory::High).unwrap();
        assert_eq!(quote.base_cost, 22.58);
        assert_relative_eq!(quote.commercial_premium, 22.58 * 1.18 / 0.85, epsilon = 1e-12);
        assert!((quote.commercial_premium - 31.34).abs() < 0.01);
        assert!((quote.loadings - 8.76).abs() < 0.01);
    }

    #[test]
    fn test_quote_age_94_low_density() {
        let tariff = Tariff::published();

        // 1778.48 * 1.20 / 0.85 = 2511.03...
        let quote = tariff.quote(94, DensityCategory::Low).unwrap();
        assert_eq!(quote.base_cost, 1778.48);
        assert!((quote.commercial_premium - 2511.04).abs() < 0.01);
        assert!((quote.loadings - 732.56).abs() < 0.01);
    }

    #[test]
    fn test_quote_rejects_out_of_band_ages() {
        let tariff = Tariff::published();

        assert_eq!(
            tariff.quote(64, DensityCategory::High).unwrap_err(),
            QuoteError::AgeOutOfRange(64)
        );
        assert_eq!(
            tariff.quote(95, DensityCategory::High).unwrap_err(),
            QuoteError::AgeOutOfRange(95)
        );
    }

    #[test]
    fn test_premium_exceeds_base_cost_everywhere() {
        // (1 + margin) / (1 - expense_ratio) > 1 for the published
        // parameters, so loadings stay positive across the whole band
        let tariff = Tariff::published();

        for age in tariff.rates.ages() {
            for density in DensityCategory::ALL {
                let quote = tariff.quote(age, density).unwrap();
                assert!(quote.base_cost > 0.0);
                assert!(quote.commercial_premium > quote.base_cost);
                assert!(quote.loadings > 0.0);
            }
        }
    }

    #[test]
    fn test_breakdown_identity() {
        let tariff = Tariff::published();

        for age in tariff.rates.ages() {
            for density in DensityCategory::ALL {
                let quote = tariff.quote(age, density).unwrap();
                assert!(
                    (quote.commercial_premium - quote.base_cost - quote.loadings).abs() < 1e-9,
                    "breakdown identity broken at age {}", age
                );
            }
        }
    }

    #[test]
    fn test_premium_non_decreasing_in_age() {
        let tariff = Tariff::published();

        for density in DensityCategory::ALL {
            let mut prev = 0.0;
            for age in tariff.rates.ages() {
                let premium = tariff.quote(age, density).unwrap().commercial_premium;
                assert!(premium >= prev, "premium dips at age {}", age);
                prev = premium;
            }
        }
    }

    #[test]
    fn test_quote_is_idempotent() {
        let tariff = Tariff::published();

        let first = tariff.quote(77, DensityCategory::Low).unwrap();
        let second = tariff.quote(77, DensityCategory::Low).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_density_parsing() {
        assert_eq!("high".parse::<DensityCategory>().unwrap(), DensityCategory::High);
        assert_eq!(" Low ".parse::<DensityCategory>().unwrap(), DensityCategory::Low);
        assert_eq!(
            "forte".parse::<DensityCategory>().unwrap_err(),
            QuoteError::InvalidCategory("forte".to_string())
        );
    }

    #[test]
    fn test_density_wire_form() {
        let json = serde_json::to_string(&DensityCategory::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: DensityCategory = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, DensityCategory::Low);
    }
}
