//! Full tariff schedule generation
//!
//! Produces the complete quote grid (every rated age, both densities) for
//! publication output and comparison against the Excel reference.

use serde::Serialize;

use crate::error::QuoteError;
use crate::quote::{DensityCategory, QuoteResult};
use crate::rates::Tariff;

/// One line of the published schedule
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScheduleRow {
    pub age: u8,
    pub density: DensityCategory,
    #[serde(flatten)]
    pub quote: QuoteResult,
}

/// The full quote grid, ordered by age then density
#[derive(Debug, Clone)]
pub struct TariffSchedule {
    rows: Vec<ScheduleRow>,
}

impl TariffSchedule {
    /// Quote every rated age for both densities
    pub fn generate(tariff: &Tariff) -> Result<Self, QuoteError> {
        let mut rows = Vec::with_capacity(tariff.rates.ages().count() * 2);

        for age in tariff.rates.ages() {
            for density in DensityCategory::ALL {
                rows.push(ScheduleRow {
                    age,
                    density,
                    quote: tariff.quote(age, density)?,
                });
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
