//! CSV-based rates loader
//!
//! Loads the base-cost table and pricing parameters from CSV files in
//! data/rates/

use std::error::Error;
use std::fs::File;
use std::path::Path;

use crate::error::TariffError;
use crate::rates::RateTable;

/// Default path to the rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

/// Load base costs from CSV
/// Returns Vec<(high_density, low_density)> indexed by age - 65
pub fn load_base_costs(path: &Path) -> Result<Vec<(f64, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("base_costs.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut costs = vec![(0.0, 0.0); RateTable::AGE_COUNT];
    let mut seen = [false; RateTable::AGE_COUNT];

    for result in reader.records() {
        let record = result?;
        let age: usize = record[0].parse()?;
        let high: f64 = record[1].parse()?;
        let low: f64 = record[2].parse()?;

        let min_age = RateTable::MIN_AGE as usize;
        if age < min_age || age - min_age >= costs.len() {
            log::warn!("ignoring base cost row for unrated age {}", age);
            continue;
        }

        let idx = age - min_age;
        if seen[idx] {
            return Err(TariffError::DuplicateAge(age as u8).into());
        }
        seen[idx] = true;
        costs[idx] = (high, low);
    }

    if let Some(idx) = seen.iter().position(|&s| !s) {
        return Err(TariffError::MissingAge(RateTable::MIN_AGE + idx as u8).into());
    }

    Ok(costs)
}

/// Load pricing parameters from CSV
/// Returns (margin_high, margin_low, expense_ratio)
pub fn load_pricing_parameters(path: &Path) -> Result<(f64, f64, f64), Box<dyn Error>> {
    let file = File::open(path.join("pricing_parameters.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut margin_high = None;
    let mut margin_low = None;
    let mut expense_ratio = None;

    for result in reader.records() {
        let record = result?;
        let value: f64 = record[1].parse()?;
        match &record[0] {
            "margin_high" => margin_high = Some(value),
            "margin_low" => margin_low = Some(value),
            "expense_ratio" => expense_ratio = Some(value),
            other => log::warn!("ignoring unknown pricing parameter '{}'", other),
        }
    }

    Ok((
        margin_high.ok_or("missing pricing parameter 'margin_high'")?,
        margin_low.ok_or("missing pricing parameter 'margin_low'")?,
        expense_ratio.ok_or("missing pricing parameter 'expense_ratio'")?,
    ))
}

/// All rates loaded from a directory, prior to validation
pub struct LoadedRates {
    pub base_costs: Vec<(f64, f64)>,
    pub margin_high: f64,
    pub margin_low: f64,
    pub expense_ratio: f64,
}

impl LoadedRates {
    /// Load all rates from the default path
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load all rates from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let base_costs = load_base_costs(path)?;
        let (margin_high, margin_low, expense_ratio) = load_pricing_parameters(path)?;

        Ok(Self {
            base_costs,
            margin_high,
            margin_low,
            expense_ratio,
        })
    }
}
