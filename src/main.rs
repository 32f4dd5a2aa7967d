//! Umbrella Pricing CLI
//!
//! Command-line demo for quoting premiums and dumping the full schedule
//! Accepts input via environment variables: QUOTE_AGE, QUOTE_DENSITY

use std::env;
use std::fs::File;
use std::io::Write;

use umbrella_pricing::{DensityCategory, Tariff, TariffSchedule};

fn main() {
    env_logger::init();

    println!("Umbrella Pricing v0.1.0");
    println!("=======================\n");

    let tariff = match Tariff::from_csv() {
        Ok(t) => {
            log::info!("rates loaded from data/rates/");
            t
        }
        Err(e) => {
            log::warn!("falling back to published in-memory rates: {}", e);
            Tariff::published()
        }
    };

    if let Err(e) = tariff.validate() {
        eprintln!("Tariff failed validation: {}", e);
        std::process::exit(1);
    }

    // Sample quote - age 72 in a high-density (urban) zone unless overridden
    let age: u8 = env::var("QUOTE_AGE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(72);
    let density: DensityCategory = env::var("QUOTE_DENSITY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DensityCategory::High);

    match tariff.quote(age, density) {
        Ok(quote) => {
            println!("Quote (age {}, {} density):", age, density);
            println!("  Base cost:          {:>10.2} €/yr", quote.base_cost);
            println!("  Loadings:           {:>10.2} €/yr", quote.loadings);
            println!("  Commercial premium: {:>10.2} €/yr", quote.commercial_premium);
            println!("  Monthly equivalent: {:>10.2} €/mo", quote.commercial_premium / 12.0);
        }
        Err(e) => {
            eprintln!("Cannot quote: {}", e);
            std::process::exit(1);
        }
    }

    // Full schedule
    let schedule = match TariffSchedule::generate(&tariff) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to generate schedule: {}", e);
            std::process::exit(1);
        }
    };

    println!("\nTariff schedule ({} rows):", schedule.len());
    println!("{:>4} {:>8} {:>12} {:>12} {:>12}",
        "Age", "Density", "BaseCost", "Loadings", "Premium");
    println!("{}", "-".repeat(52));

    for row in schedule.rows().iter().take(10) {
        println!("{:>4} {:>8} {:>12.2} {:>12.2} {:>12.2}",
            row.age,
            row.density.as_str(),
            row.quote.base_cost,
            row.quote.loadings,
            row.quote.commercial_premium,
        );
    }

    if schedule.len() > 10 {
        println!("... ({} more rows)", schedule.len() - 10);
    }

    // Write full schedule to CSV
    let csv_path = "tariff_schedule.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Age,Density,BaseCost,Loadings,CommercialPremium").unwrap();
    for row in schedule.rows() {
        writeln!(file, "{},{},{:.8},{:.8},{:.8}",
            row.age,
            row.density.as_str(),
            row.quote.base_cost,
            row.quote.loadings,
            row.quote.commercial_premium,
        ).unwrap();
    }

    println!("\nFull schedule written to: {}", csv_path);

    // Reference points for Excel comparison
    println!("\nKey reference quotes:");
    for (age, density) in [(65, DensityCategory::High), (94, DensityCategory::Low)] {
        if let Ok(q) = tariff.quote(age, density) {
            println!("  Age {:>2} {:>4}: Base={:.2} Loadings={:.2} Premium={:.2}",
                age, density.as_str(), q.base_cost, q.loadings, q.commercial_premium);
        }
    }
}
