//! Umbrella Pricing - premium rating engine for the Umbrella senior health mutual
//!
//! This library provides:
//! - The published base-cost table for ages 65-94 by medical-provider density
//! - Pricing parameters (margin rates, expense ratio) with load-time validation
//! - Commercial premium quoting with a transparent breakdown
//! - Full tariff schedule generation for publication and Excel comparison

pub mod error;
pub mod quote;
pub mod rates;

// Re-export commonly used types
pub use error::{QuoteError, TariffError};
pub use quote::{DensityCategory, QuoteResult, TariffSchedule};
pub use rates::{PricingParameters, RateTable, Tariff};
