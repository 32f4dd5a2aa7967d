//! Published actuarial rates: base-cost table and pricing parameters

mod parameters;
mod table;
pub mod loader;

pub use loader::LoadedRates;
pub use parameters::PricingParameters;
pub use table::RateTable;

use crate::error::TariffError;
use std::path::Path;

/// Container for everything needed to quote a premium
///
/// Built once at startup and read-only afterwards; concurrent reads from any
/// number of threads are safe.
#[derive(Debug, Clone)]
pub struct Tariff {
    pub rates: RateTable,
    pub parameters: PricingParameters,
}

impl Tariff {
    /// Create the tariff from the published in-memory dataset
    pub fn published() -> Self {
        Self {
            rates: RateTable::published(),
            parameters: PricingParameters::published(),
        }
    }

    /// Load the tariff from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load the tariff from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedRates::load_from(path)?;

        Ok(Self {
            rates: RateTable::from_loaded(&loaded)?,
            parameters: PricingParameters::from_loaded(&loaded)?,
        })
    }

    /// Validate both the table and the parameters
    pub fn validate(&self) -> Result<(), TariffError> {
        self.rates.validate()?;
        self.parameters.validate()
    }
}
