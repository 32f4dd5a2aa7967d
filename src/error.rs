//! Error taxonomy for quoting and tariff loading

use thiserror::Error;

/// Errors returned by the premium calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// Age outside the rated band. The table defines no behavior outside
    /// 65-94, so the age is rejected rather than clamped to a boundary.
    #[error("age {0} is outside the rated band 65-94")]
    AgeOutOfRange(u8),

    /// Density value not recognized at the presentation boundary. This is an
    /// integration bug between the front-end and the rating engine, not a
    /// transient condition.
    #[error("unrecognized density category '{0}' (expected 'high' or 'low')")]
    InvalidCategory(String),
}

/// Load-time validation failures for the rate table and pricing parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TariffError {
    #[error("rate table has {0} entries, expected 30 contiguous ages 65-94")]
    WrongEntryCount(usize),

    #[error("base cost {value} for age {age} must be strictly positive")]
    NonPositiveBaseCost { age: u8, value: f64 },

    #[error("duplicate base cost row for age {0}")]
    DuplicateAge(u8),

    #[error("missing base cost row for age {0}")]
    MissingAge(u8),

    #[error("margin rate {0} must be non-negative")]
    NegativeMarginRate(f64),

    /// The commercial premium divides by `1 - expense_ratio`, so the ratio
    /// must stay strictly below 1.
    #[error("expense ratio {0} must lie in [0, 1)")]
    ExpenseRatioOutOfRange(f64),
}
