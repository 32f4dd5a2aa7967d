//! Generate the full tariff grid for comparison against the Excel reference
//!
//! Writes tariff_grid.csv with one row per (age, density) pair
//! Accepts config via environment variables:
//!   RATES_PATH - directory holding the rate CSVs (default: data/rates)
//!   USE_PUBLISHED_RATES=1 to skip CSV loading and use the in-memory dataset

use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use umbrella_pricing::{DensityCategory, Tariff};

fn main() {
    env_logger::init();

    println!("Generating tariff grid...\n");
    let start = Instant::now();

    let tariff = if env::var("USE_PUBLISHED_RATES").is_ok() {
        Tariff::published()
    } else {
        let path = env::var("RATES_PATH").unwrap_or_else(|_| "data/rates".to_string());
        match Tariff::from_csv_path(Path::new(&path)) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("could not load rates from {}: {}; using published dataset", path, e);
                Tariff::published()
            }
        }
    };

    if let Err(e) = tariff.validate() {
        eprintln!("Tariff failed validation: {}", e);
        std::process::exit(1);
    }

    // Quote every age in parallel; each quote is pure so no coordination needed
    let ages: Vec<u8> = tariff.rates.ages().collect();
    let rows: Vec<(u8, DensityCategory, f64, f64, f64)> = ages
        .par_iter()
        .flat_map(|&age| {
            DensityCategory::ALL
                .iter()
                .map(|&density| {
                    // The grid only spans rated ages, so quoting cannot fail here
                    let quote = tariff
                        .quote(age, density)
                        .expect("grid spans only rated ages");
                    (age, density, quote.base_cost, quote.loadings, quote.commercial_premium)
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let csv_path = "tariff_grid.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Age,Density,BaseCost,Loadings,CommercialPremium").unwrap();
    for (age, density, base_cost, loadings, premium) in &rows {
        writeln!(file, "{},{},{:.8},{:.8},{:.8}",
            age, density.as_str(), base_cost, loadings, premium).unwrap();
    }

    println!("{} rows written to: {}", rows.len(), csv_path);
    println!("Elapsed: {} ms", start.elapsed().as_millis());

    // Spot-check rows for manual comparison with the Excel sheet
    println!("\nSpot checks:");
    for (age, density) in [(65, DensityCategory::High), (79, DensityCategory::Low), (94, DensityCategory::Low)] {
        if let Some((_, _, base, loadings, premium)) =
            rows.iter().find(|(a, d, ..)| *a == age && *d == density)
        {
            println!("  Age {:>2} {:>4}: Base={:.2} Loadings={:.2} Premium={:.2}",
                age, density.as_str(), base, loadings, premium);
        }
    }
}
