//! Base-cost table by age and medical-provider density
//!
//! The table covers the rated band 65-94 with one row per age, each holding
//! the annual base cost for high-density and low-density zones. Values come
//! from the published Excel dataset and are kept exactly as published: age 79
//! carries identical high/low costs and the 77-79 rows break the otherwise
//! widening high/low gap. That is source data, not an error, and must not be
//! smoothed.

use crate::error::TariffError;
use crate::quote::DensityCategory;

/// Immutable base-cost table for the rated band
#[derive(Debug, Clone)]
pub struct RateTable {
    /// Annual base costs indexed by `age - MIN_AGE`
    /// Stored as (high_density, low_density)
    base_costs: Vec<(f64, f64)>,
}

impl RateTable {
    /// Youngest rated age
    pub const MIN_AGE: u8 = 65;

    /// Oldest rated age
    pub const MAX_AGE: u8 = 94;

    /// Number of rated ages (65-94 inclusive)
    pub const AGE_COUNT: usize = (Self::MAX_AGE - Self::MIN_AGE + 1) as usize;

    /// Create the published table from the Excel dataset
    pub fn published() -> Self {
        Self {
            base_costs: Self::published_base_costs(),
        }
    }

    /// Create from loaded CSV rates
    pub fn from_loaded(loaded: &super::loader::LoadedRates) -> Result<Self, TariffError> {
        Self::new(loaded.base_costs.clone())
    }

    /// Create from explicit rows, validating the table shape
    pub fn new(base_costs: Vec<(f64, f64)>) -> Result<Self, TariffError> {
        let table = Self { base_costs };
        table.validate()?;
        Ok(table)
    }

    /// Check the table invariants: exactly 30 contiguous ages starting at 65,
    /// two strictly positive values each
    pub fn validate(&self) -> Result<(), TariffError> {
        if self.base_costs.len() != Self::AGE_COUNT {
            return Err(TariffError::WrongEntryCount(self.base_costs.len()));
        }

        for (idx, &(high, low)) in self.base_costs.iter().enumerate() {
            let age = Self::MIN_AGE + idx as u8;
            if high <= 0.0 {
                return Err(TariffError::NonPositiveBaseCost { age, value: high });
            }
            if low <= 0.0 {
                return Err(TariffError::NonPositiveBaseCost { age, value: low });
            }
        }

        Ok(())
    }

    /// Whether the age falls inside the rated band
    pub fn covers(&self, age: u8) -> bool {
        (Self::MIN_AGE..=Self::MAX_AGE).contains(&age)
    }

    /// Get the annual base cost for a given age and density
    ///
    /// Returns `None` for ages outside the rated band; the caller decides how
    /// to surface the rejection.
    pub fn base_cost(&self, age: u8, density: DensityCategory) -> Option<f64> {
        if !self.covers(age) {
            return None;
        }

        let (high, low) = self.base_costs[(age - Self::MIN_AGE) as usize];
        Some(match density {
            DensityCategory::High => high,
            DensityCategory::Low => low,
        })
    }

    /// Iterate over all rated ages in ascending order
    pub fn ages(&self) -> impl Iterator<Item = u8> {
        Self::MIN_AGE..=Self::MAX_AGE
    }

    /// Published base costs (high_density, low_density) for ages 65-94
    fn published_base_costs() -> Vec<(f64, f64)> {
        vec![
            // Age 65-69
            (22.58, 32.08), (24.73, 32.08), (28.00, 32.08),
            (32.70, 34.41), (38.50, 40.43),
            // Age 70-74
            (45.88, 49.39), (53.56, 61.09), (63.22, 75.76),
            (77.47, 96.00), (95.06, 118.04),
            // Age 75-79
            (116.10, 137.53), (140.11, 158.64), (167.02, 178.29),
            (196.99, 197.83), (229.68, 229.68),
            // Age 80-84
            (261.17, 270.58), (296.53, 322.34), (337.22, 380.01),
            (384.89, 448.16), (439.86, 535.27),
            // Age 85-89
            (506.18, 631.85), (598.53, 729.04), (699.62, 835.34),
            (798.15, 961.34), (902.44, 1094.13),
            // Age 90-94
            (1013.60, 1226.23), (1130.73, 1361.76), (1252.75, 1497.89),
            (1380.25, 1636.81), (1513.21, 1778.48),
        ]
    }
}
